//! `ShareCount` newtype for secret reconstruction

use crate::error::ResolveError;

/// Number of shares available for reconstruction (n >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`ResolveError::InsufficientShares`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use secret_quorum::domain::ShareCount;
    ///
    /// let count = ShareCount::new(10).unwrap();
    /// assert_eq!(*count, 10);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, ResolveError> {
        if value < Self::MIN {
            return Err(ResolveError::InsufficientShares {
                required: Self::MIN,
                available: value,
            });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
