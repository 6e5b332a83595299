//! Enumeration of fixed-size subsets
//!
//! [`combinations`] walks every k-element subset of a slice in lexicographic
//! order of index positions: `[0, 1, .., k-1]` first, `[n-k, .., n-1]` last.
//! Each subset keeps the relative order of its items in the input.

use num_bigint::BigUint;
use num_integer::binomial;
use num_traits::Zero;

use crate::error::ResolveError;

/// Iterator over all k-subsets of a slice
///
/// Created by [`combinations`]. Finite and deterministic: calling
/// [`combinations`] again on the same input yields the same sequence.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    positions: Vec<usize>,
    done: bool,
}

/// Enumerates every `k`-element subset of `items`
///
/// Yields exactly C(n, k) subsets. `k == 0` yields a single empty subset.
///
/// # Errors
/// Returns [`ResolveError::InvalidThreshold`] if `k > items.len()`
///
/// # Examples
///
/// ```rust
/// use secret_quorum::combinations::combinations;
///
/// let subsets: Vec<Vec<char>> = combinations(&['a', 'b', 'c', 'd'], 2).unwrap().collect();
/// assert_eq!(subsets.len(), 6);
/// assert_eq!(subsets[0], vec!['a', 'b']);
/// assert_eq!(subsets[5], vec!['c', 'd']);
///
/// assert!(combinations(&['a'], 2).is_err());
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Result<Combinations<'_, T>, ResolveError> {
    if k > items.len() {
        return Err(ResolveError::InvalidThreshold {
            k,
            n: items.len(),
        });
    }

    Ok(Combinations {
        items,
        positions: (0..k).collect(),
        done: false,
    })
}

/// Number of k-subsets of an n-element set, C(n, k)
///
/// Zero when `k > n`.
#[must_use]
pub fn subset_count(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    binomial(BigUint::from(n), BigUint::from(k))
}

impl<T> Combinations<'_, T> {
    /// Moves `positions` to the next subset, or marks the iterator done
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.positions.len();

        // Rightmost position that can still move right
        let Some(pivot) = (0..k).rev().find(|&i| self.positions[i] < n - k + i) else {
            self.done = true;
            return;
        };

        self.positions[pivot] += 1;
        for i in pivot + 1..k {
            self.positions[i] = self.positions[i - 1] + 1;
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self
            .positions
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();
        self.advance();

        Some(subset)
    }
}
