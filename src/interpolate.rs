//! Lagrange interpolation at x = 0 over the integers
//!
//! For a subset of k shares, the secret is the constant term of the unique
//! degree k-1 polynomial through them:
//!
//! ```text
//! f(0) = Σ_i  y_i · Π_{j≠i} (0 - x_j) / Π_{j≠i} (x_i - x_j)
//! ```
//!
//! Numerator and denominator of each term are exact running products, and
//! `(y_i · num_i) / den_i` is an exact integer division truncating toward
//! zero. For shares of an integer polynomial whose terms divide evenly the
//! result is the true constant term.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::trace;

use crate::domain::Share;
use crate::error::ResolveError;

/// Computes f(0) for the polynomial passing through every share in `subset`
///
/// An empty subset yields 0.
///
/// # Errors
/// Returns [`ResolveError::DegenerateSubset`] if two shares have the same x
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use secret_quorum::domain::Share;
/// use secret_quorum::interpolate::secret_at;
///
/// // f(x) = x² + 3
/// let subset = [Share::new(1, 4), Share::new(2, 7), Share::new(3, 12)];
/// assert_eq!(secret_at(&subset).unwrap(), BigInt::from(3));
/// ```
pub fn secret_at(subset: &[Share]) -> Result<BigInt, ResolveError> {
    let mut seen = HashSet::with_capacity(subset.len());
    if let Some(dup) = subset.iter().find(|share| !seen.insert(&share.x)) {
        return Err(ResolveError::DegenerateSubset { x: dup.x.clone() });
    }

    let mut secret = BigInt::zero();
    for (i, share) in subset.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, other) in subset.iter().enumerate() {
            if i != j {
                numerator *= -&other.x;
                denominator *= &share.x - &other.x;
            }
        }

        let (term, remainder) = (&share.y * numerator).div_rem(&denominator);
        if !remainder.is_zero() {
            trace!(x = %share.x, %remainder, "inexact Lagrange term");
        }
        secret += term;
    }

    Ok(secret)
}
