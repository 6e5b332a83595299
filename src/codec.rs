//! Positional numeral decoding for share values
//!
//! Share values arrive as digit strings in a declared radix between 2 and 16.
//! Digits `0`-`9` carry their face value and the letters `a`-`f` (either case)
//! carry 10-15. Decoding accumulates `acc * radix + digit` from the most
//! significant digit down, so values of any width are represented exactly.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use secret_quorum::codec::{decode, encode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(decode("111", 2)?, BigInt::from(7));
//! assert_eq!(decode("1F1", 16)?, BigInt::from(497));
//!
//! // Digits outside the radix are rejected
//! assert!(decode("1g1", 16).is_err());
//! assert!(decode("19", 8).is_err());
//!
//! // encode is the inverse of decode
//! let value = BigInt::from(123_456_789u64);
//! assert_eq!(decode(&encode(&value, 7)?, 7)?, value);
//! # Ok(())
//! # }
//! ```

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::error::ResolveError;

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix
pub const MAX_RADIX: u32 = 16;

fn check_radix(radix: u32) -> Result<(), ResolveError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ResolveError::InvalidRadix(radix))
    }
}

/// Decodes a digit string in `radix` into an exact integer
///
/// # Errors
/// Returns [`ResolveError::InvalidRadix`] for a radix outside 2..=16,
/// [`ResolveError::EmptyDigits`] for an empty string and
/// [`ResolveError::InvalidDigit`] for the first character that is not a digit
/// of `radix`. Nothing is returned for a partially decoded string.
pub fn decode(digits: &str, radix: u32) -> Result<BigInt, ResolveError> {
    check_radix(radix)?;

    if digits.is_empty() {
        return Err(ResolveError::EmptyDigits);
    }

    let mut value = BigInt::zero();
    for digit in digits.chars() {
        // to_digit(16) covers 0-9, a-f and A-F; anything else has no value
        let digit_value = digit
            .to_digit(MAX_RADIX)
            .filter(|&d| d < radix)
            .ok_or(ResolveError::InvalidDigit { digit, radix })?;

        value = value * radix + digit_value;
    }

    Ok(value)
}

/// Encodes a non-negative integer as lower-case digits in `radix`
///
/// # Errors
/// Returns [`ResolveError::InvalidRadix`] for a radix outside 2..=16.
///
/// A negative value gets a leading `-`, which [`decode`] rejects, so only
/// non-negative values round-trip.
pub fn encode(value: &BigInt, radix: u32) -> Result<String, ResolveError> {
    check_radix(radix)?;

    let digits = value.magnitude().to_str_radix(radix);
    Ok(match value.sign() {
        Sign::Minus => format!("-{digits}"),
        _ => digits,
    })
}
