//! Threshold configuration for a reconstruction run

use crate::error::ResolveError;

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count
///
/// Enforces 1 <= k <= n at the type level, so a run never asks for more
/// shares than it has. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl ThresholdConfig {
    /// Creates a new threshold configuration
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidThreshold`] if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use secret_quorum::domain::{ShareCount, Threshold, ThresholdConfig};
    ///
    /// // Valid: threshold <= share_count
    /// let config = ThresholdConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(4).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 4);
    /// assert_eq!(config.degree(), 2);
    ///
    /// // Invalid: threshold > share_count
    /// let result = ThresholdConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self, ResolveError> {
        if *threshold > *share_count {
            return Err(ResolveError::InvalidThreshold {
                k: *threshold,
                n: *share_count,
            });
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Builds a configuration from raw `k` and `n`
    ///
    /// # Errors
    /// Returns an error if `k` is 0, `n` is 0, or `k > n`
    pub fn from_raw(k: usize, n: usize) -> Result<Self, ResolveError> {
        let share_count = ShareCount::new(n)?;
        let threshold =
            Threshold::new(k).map_err(|_| ResolveError::InvalidThreshold { k, n })?;
        Self::new(threshold, share_count)
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Degree of the secret polynomial (k - 1)
    #[must_use]
    pub fn degree(&self) -> usize {
        self.threshold.degree()
    }
}
