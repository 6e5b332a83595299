//! Error kinds raised by the reconstruction engine

use num_bigint::BigInt;
use thiserror::Error;

/// Failure of a decode, enumeration, interpolation or consensus step
///
/// Every variant aborts the run that produced it. The engine never skips a
/// failing share or subset, since a silently dropped subset would bias the
/// frequency tally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A character is not a digit of the declared radix
    #[error("Invalid digit '{digit}' for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Radix outside the supported 2..=16 range
    #[error("Unsupported base {0}: must be between 2 and 16")]
    InvalidRadix(u32),

    /// Nothing to decode
    #[error("Empty digit string")]
    EmptyDigits,

    /// A threshold of zero
    #[error("Threshold must be at least 1")]
    ZeroThreshold,

    /// Threshold is zero or larger than the number of available items
    #[error("Invalid threshold {k} for {n} shares")]
    InvalidThreshold { k: usize, n: usize },

    /// Two shares of one subset have the same x coordinate
    #[error("Degenerate subset: x = {x} appears more than once")]
    DegenerateSubset { x: BigInt },

    /// Fewer shares than the threshold requires
    #[error("Insufficient shares: need at least {required}, but only {available} provided")]
    InsufficientShares { required: usize, available: usize },

    /// Several candidate secrets share the highest occurrence count
    #[error(
        "Ambiguous consensus: {} candidates tie with {occurrences} occurrences each",
        .candidates.len()
    )]
    AmbiguousConsensus {
        occurrences: usize,
        candidates: Vec<BigInt>,
    },

    /// Tie policy name not recognized
    #[error("Invalid tie break '{0}': expected 'first' or 'reject'")]
    UnknownTieBreak(String),
}
