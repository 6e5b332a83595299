//! Threshold newtype for secret reconstruction

use crate::error::ResolveError;

/// Reconstruction threshold k (k >= 1)
///
/// The secret polynomial has degree k - 1, so any k genuine shares determine it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    /// Smallest valid threshold
    pub const MIN: usize = 1;

    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`ResolveError::ZeroThreshold`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use secret_quorum::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    /// assert_eq!(threshold.degree(), 2);
    ///
    /// // Invalid: at least one share is always needed
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, ResolveError> {
        if value < Self::MIN {
            return Err(ResolveError::ZeroThreshold);
        }
        Ok(Self(value))
    }

    /// Degree of the polynomial this threshold reconstructs
    #[must_use]
    pub fn degree(self) -> usize {
        self.0 - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
