//! Frequency consensus over every k-subset of the shares
//!
//! Each k-subset interpolates to a candidate secret. Subsets drawn only from
//! genuine shares agree with each other, while subsets that contain a
//! corrupted share generically scatter, so the most frequent candidate is
//! taken as the secret. Shares that never appear in a subset producing the
//! winner are reported as wrong.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use secret_quorum::consensus::resolve;
//! use secret_quorum::domain::Share;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // f(x) = 12x + 60, with the share at x = 3 corrupted
//! let shares = [
//!     Share::new(1, 72),
//!     Share::new(2, 84),
//!     Share::new(3, 100),
//!     Share::new(4, 108),
//! ];
//!
//! let resolution = resolve(&shares, 2)?;
//! assert_eq!(resolution.secret, BigInt::from(60));
//! assert!(resolution.wrong.contains(&Share::new(3, 100)));
//! assert_eq!(resolution.wrong.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::combinations::{combinations, subset_count};
use crate::domain::Share;
use crate::error::ResolveError;
use crate::interpolate::secret_at;

/// What to do when several candidates share the highest count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Fail with [`ResolveError::AmbiguousConsensus`]
    Reject,
    /// Pick the candidate produced by the earliest enumerated subset
    #[default]
    FirstEnumerated,
}

impl FromStr for TieBreak {
    type Err = ResolveError;

    /// Parses `"first"` or `"reject"`; an empty string selects the default
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self::default()),
            "first" => Ok(Self::FirstEnumerated),
            "reject" => Ok(Self::Reject),
            other => Err(ResolveError::UnknownTieBreak(other.to_string())),
        }
    }
}

/// One candidate secret and the evidence behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub secret: BigInt,
    /// Number of subsets that interpolated to `secret`
    pub occurrences: usize,
    /// Every share that appears in at least one of those subsets
    pub shares: BTreeSet<Share>,
}

/// Candidate secrets in order of first appearance
///
/// The occurrence counts always sum to the number of subsets recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    candidates: Vec<Candidate>,
    index: HashMap<BigInt, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one subset and the secret it interpolated to
    pub fn record(&mut self, secret: BigInt, subset: &[Share]) {
        let slot = match self.index.get(&secret) {
            Some(&slot) => slot,
            None => {
                let slot = self.candidates.len();
                self.index.insert(secret.clone(), slot);
                self.candidates.push(Candidate {
                    secret,
                    occurrences: 0,
                    shares: BTreeSet::new(),
                });
                slot
            }
        };

        let candidate = &mut self.candidates[slot];
        candidate.occurrences += 1;
        candidate.shares.extend(subset.iter().cloned());
    }

    /// Candidates in order of first appearance
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn get(&self, secret: &BigInt) -> Option<&Candidate> {
        self.index.get(secret).map(|&slot| &self.candidates[slot])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Total number of subsets recorded
    #[must_use]
    pub fn total_occurrences(&self) -> usize {
        self.candidates.iter().map(|c| c.occurrences).sum()
    }

    /// Candidates sorted by occurrence count, most frequent first
    ///
    /// Equal counts keep their order of first appearance.
    #[must_use]
    pub fn ranked(&self) -> Vec<&Candidate> {
        let mut ranked: Vec<_> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        ranked
    }

    /// Picks the most frequent candidate according to `tie_break`
    ///
    /// # Errors
    /// Returns [`ResolveError::AmbiguousConsensus`] under [`TieBreak::Reject`]
    /// when more than one candidate has the highest count, and
    /// [`ResolveError::InsufficientShares`] if nothing was recorded.
    pub fn winner(&self, tie_break: TieBreak) -> Result<&Candidate, ResolveError> {
        let top = self
            .candidates
            .iter()
            .map(|c| c.occurrences)
            .max()
            .ok_or(ResolveError::InsufficientShares {
                required: 1,
                available: 0,
            })?;

        let leaders: Vec<&Candidate> = self
            .candidates
            .iter()
            .filter(|c| c.occurrences == top)
            .collect();

        match leaders.as_slice() {
            [only] => Ok(*only),
            [first, ..] if tie_break == TieBreak::FirstEnumerated => Ok(*first),
            _ => Err(ResolveError::AmbiguousConsensus {
                occurrences: top,
                candidates: leaders.iter().map(|c| c.secret.clone()).collect(),
            }),
        }
    }
}

/// Outcome of a reconstruction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub secret: BigInt,
    /// Shares in at least one subset that produced `secret`
    pub correct: BTreeSet<Share>,
    /// Input shares not in `correct`
    pub wrong: BTreeSet<Share>,
    pub tally: Tally,
}

/// Resolves the secret by majority
///
/// A tie for the highest count goes to the candidate whose first subset was
/// enumerated earliest. Same as [`resolve_with`] using
/// [`TieBreak::FirstEnumerated`].
///
/// # Errors
/// See [`resolve_with`].
pub fn resolve(shares: &[Share], k: usize) -> Result<Resolution, ResolveError> {
    resolve_with(shares, k, TieBreak::default())
}

/// Resolves the secret from `shares` with threshold `k`
///
/// Every k-subset is interpolated. The first failure aborts the whole run, so
/// the tally is never built from a partial sweep.
///
/// # Errors
/// - [`ResolveError::InsufficientShares`] if `shares` is empty or shorter than `k`
/// - [`ResolveError::InvalidThreshold`] if `k` is 0
/// - [`ResolveError::DegenerateSubset`] if two shares have the same x
/// - [`ResolveError::AmbiguousConsensus`] on a tied majority under [`TieBreak::Reject`]
pub fn resolve_with(
    shares: &[Share],
    k: usize,
    tie_break: TieBreak,
) -> Result<Resolution, ResolveError> {
    if shares.is_empty() || shares.len() < k {
        return Err(ResolveError::InsufficientShares {
            required: k.max(1),
            available: shares.len(),
        });
    }
    if k == 0 {
        return Err(ResolveError::InvalidThreshold {
            k,
            n: shares.len(),
        });
    }

    debug!(
        n = shares.len(),
        k,
        subsets = %subset_count(shares.len(), k),
        "evaluating subsets"
    );

    let tally = build_tally(shares, k)?;
    let winner = tally.winner(tie_break)?;
    let secret = winner.secret.clone();
    let correct = winner.shares.clone();

    let wrong: BTreeSet<Share> = shares
        .iter()
        .filter(|share| !correct.contains(*share))
        .cloned()
        .collect();

    debug!(
        %secret,
        occurrences = winner.occurrences,
        candidates = tally.len(),
        wrong = wrong.len(),
        "consensus reached"
    );

    Ok(Resolution {
        secret,
        correct,
        wrong,
        tally,
    })
}

#[cfg(not(feature = "parallel"))]
fn build_tally(shares: &[Share], k: usize) -> Result<Tally, ResolveError> {
    let mut tally = Tally::new();
    for subset in combinations(shares, k)? {
        let secret = secret_at(&subset)?;
        trace!(%secret, "subset evaluated");
        tally.record(secret, &subset);
    }
    Ok(tally)
}

#[cfg(feature = "parallel")]
fn build_tally(shares: &[Share], k: usize) -> Result<Tally, ResolveError> {
    use rayon::prelude::*;

    let subsets: Vec<Vec<Share>> = combinations(shares, k)?.collect();

    // collect keeps enumeration order, so first appearance matches the sequential sweep
    let secrets = subsets
        .par_iter()
        .map(|subset| secret_at(subset))
        .collect::<Result<Vec<_>, _>>()?;

    let mut tally = Tally::new();
    for (secret, subset) in secrets.into_iter().zip(&subsets) {
        trace!(%secret, "subset evaluated");
        tally.record(secret, subset);
    }
    Ok(tally)
}
