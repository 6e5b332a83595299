//! Property tests for enumeration, interpolation and consensus

use std::collections::{BTreeSet, HashSet};

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use secret_quorum::combinations::{combinations, subset_count};
use secret_quorum::domain::Share;
use secret_quorum::interpolate::secret_at;
use secret_quorum::resolve;

/// Wrapper for a subset size problem: 0 <= k <= n <= 12
#[derive(Clone, Copy, Debug)]
struct ChooseParams {
    n: usize,
    k: usize,
}

impl Arbitrary for ChooseParams {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 13;
        let k = usize::arbitrary(g) % (n + 1);
        ChooseParams { n, k }
    }
}

/// Random polynomial with a share layout where at most one share can be corrupted
/// without letting corrupted subsets out-vote genuine ones (2k < n)
#[derive(Clone, Debug)]
struct SharedPolynomial {
    k: usize,
    n: usize,
    coefficients: Vec<i64>,
}

impl Arbitrary for SharedPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 3 + 1; // 1..=3
        let n = 2 * k + 1 + usize::arbitrary(g) % 2; // 2k+1..=2k+2
        let coefficients = (0..k).map(|_| i64::arbitrary(g) / 4).collect();
        SharedPolynomial { k, n, coefficients }
    }
}

impl SharedPolynomial {
    /// Product of every pairwise x difference, so each Lagrange term divides exactly
    fn scale(&self) -> BigInt {
        let mut scale = BigInt::from(1);
        for i in 1..=self.n {
            for j in i + 1..=self.n {
                scale *= j - i;
            }
        }
        scale
    }

    fn secret(&self) -> BigInt {
        self.scale() * self.coefficients[0]
    }

    fn shares(&self) -> Vec<Share> {
        let scale = self.scale();
        (1..=self.n)
            .map(|x| {
                let x = BigInt::from(x);
                let mut y = BigInt::from(0);
                for &c in self.coefficients.iter().rev() {
                    y = y * &x + c;
                }
                Share::new(x, y * &scale)
            })
            .collect()
    }
}

/// Random polynomial whose last `corrupted` shares are altered, with at least
/// k genuine shares ahead of them in enumeration order
#[derive(Clone, Debug)]
struct CorruptedTail {
    poly: SharedPolynomial,
    corrupted: usize,
    negative: Vec<bool>,
}

impl Arbitrary for CorruptedTail {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 2 + 1; // 1..=2
        let genuine = k + usize::arbitrary(g) % 4; // k..=k+3
        let corrupted = 2 + usize::arbitrary(g) % 3; // 2..=4
        let coefficients = (0..k).map(|_| i64::arbitrary(g) / 4).collect();
        let negative = (0..corrupted).map(|_| bool::arbitrary(g)).collect();
        CorruptedTail {
            poly: SharedPolynomial {
                k,
                n: genuine + corrupted,
                coefficients,
            },
            corrupted,
            negative,
        }
    }
}

impl CorruptedTail {
    /// Shares with `±scale · B^(r+1)` added to the r-th corrupted share
    ///
    /// B is more than twice any scaled Lagrange weight, so the offset carried
    /// by a subset spells out which corrupted shares it holds and is never zero.
    fn shares(&self) -> Vec<Share> {
        let n = self.poly.n;
        let scale = self.poly.scale();
        let base = BigInt::from(2) * &scale * BigInt::from(n).pow(self.poly.k as u32)
            + BigInt::from(1);

        let mut shares = self.poly.shares();
        let mut weight = base.clone();
        for (share, &negative) in shares[n - self.corrupted..].iter_mut().zip(&self.negative) {
            let offset = &scale * &weight;
            if negative {
                share.y -= offset;
            } else {
                share.y += offset;
            }
            weight *= &base;
        }
        shares
    }
}

/// Test that enumeration yields exactly C(n, k) distinct subsets of size k
#[quickcheck]
fn prop_combinations_complete(params: ChooseParams) -> bool {
    let items: Vec<usize> = (0..params.n).collect();
    let Ok(iter) = combinations(&items, params.k) else {
        return false;
    };
    let subsets: Vec<Vec<usize>> = iter.collect();

    let distinct: HashSet<_> = subsets.iter().collect();
    let increasing = subsets
        .iter()
        .all(|s| s.len() == params.k && s.windows(2).all(|w| w[0] < w[1]));

    BigInt::from(subsets.len()) == BigInt::from(subset_count(params.n, params.k))
        && distinct.len() == subsets.len()
        && increasing
}

/// Test that every k-subset of genuine shares interpolates to the same secret
#[quickcheck]
fn prop_interpolation_invariance(poly: SharedPolynomial) -> bool {
    let shares = poly.shares();
    let secret = poly.secret();

    let Ok(subsets) = combinations(&shares, poly.k) else {
        return false;
    };
    subsets
        .map(|subset| secret_at(&subset))
        .all(|candidate| candidate == Ok(secret.clone()))
}

/// Test that all-genuine shares resolve to the secret with no wrong shares
#[quickcheck]
fn prop_genuine_shares_resolve(poly: SharedPolynomial) -> bool {
    let shares = poly.shares();
    let Ok(resolution) = resolve(&shares, poly.k) else {
        return false;
    };

    resolution.secret == poly.secret()
        && resolution.wrong.is_empty()
        && resolution.tally.len() == 1
}

/// Test that a single corrupted share is outvoted and flagged
#[quickcheck]
fn prop_corrupted_share_flagged(poly: SharedPolynomial, position: usize, offset: i32) -> bool {
    let offset = if offset == 0 { 1 } else { offset };
    let mut shares = poly.shares();
    let bad = position % shares.len();
    shares[bad].y += poly.scale() * offset;

    let Ok(resolution) = resolve(&shares, poly.k) else {
        return false;
    };

    let wrong: Vec<_> = resolution.wrong.iter().collect();
    resolution.secret == poly.secret()
        && wrong == vec![&shares[bad]]
        && resolution.correct.len() == shares.len() - 1
        && BigInt::from(resolution.tally.total_occurrences())
            == BigInt::from(subset_count(shares.len(), poly.k))
}

/// Test that several corrupted shares after the genuine ones are all flagged,
/// even when genuine subsets are outnumbered
#[quickcheck]
fn prop_corrupted_tail_flagged(layout: CorruptedTail) -> bool {
    let shares = layout.shares();
    let genuine = shares.len() - layout.corrupted;

    let Ok(resolution) = resolve(&shares, layout.poly.k) else {
        return false;
    };

    let expected: BTreeSet<Share> = shares[genuine..].iter().cloned().collect();
    resolution.secret == layout.poly.secret()
        && resolution.wrong == expected
        && resolution.correct.len() == genuine
}
