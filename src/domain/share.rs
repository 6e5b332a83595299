//! Share model: decoded points and their encoded form

use std::fmt;

use num_bigint::BigInt;

use crate::codec;
use crate::error::ResolveError;

/// A decoded share: one `(x, y)` point on the secret polynomial
///
/// Shares compare, hash and order by value (x first, then y), so two shares
/// with equal coordinates are interchangeable in sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Share {
    pub x: BigInt,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A share as it arrives from the loader, value not yet decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedShare {
    /// Share index, used as the x coordinate
    pub index: BigInt,
    /// Radix of `digits` (2..=16)
    pub radix: u32,
    /// Share value in `radix`
    pub digits: String,
}

impl EncodedShare {
    pub fn new(index: impl Into<BigInt>, radix: u32, digits: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            radix,
            digits: digits.into(),
        }
    }

    /// Decodes the value, consuming the encoded form
    ///
    /// # Errors
    /// Returns the decoder's error if `digits` is not a valid numeral in `radix`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use secret_quorum::domain::{EncodedShare, Share};
    ///
    /// let share = EncodedShare::new(6, 4, "213").decode().unwrap();
    /// assert_eq!(share, Share::new(6, 39));
    /// ```
    pub fn decode(self) -> Result<Share, ResolveError> {
        let y = codec::decode(&self.digits, self.radix)?;
        Ok(Share { x: self.index, y })
    }
}
