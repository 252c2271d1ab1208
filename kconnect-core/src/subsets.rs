//! Lexicographic enumeration of fixed-size vertex subsets.

use std::iter::FusedIterator;

use crate::{error::SubsetError, graph::Vertex};

/// A set of vertex labels, stored in ascending order.
pub type VertexSubset = Vec<Vertex>;

/// Iterator over every `k`-element combination of a pool of labels.
///
/// Combinations are produced in lexicographic order of their index sequence,
/// so an ascending pool yields ascending subsets in ascending order.
///
/// # Examples
/// ```
/// use kconnect_core::Combinations;
///
/// let pool = [0, 1, 2, 3];
/// let pairs: Vec<_> = Combinations::new(&pool, 2).expect("2 <= 4").collect();
/// assert_eq!(
///     pairs,
///     vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Combinations<'a> {
    pool: &'a [Vertex],
    /// Index sequence of the next subset; `None` once exhausted.
    indices: Option<Vec<usize>>,
    remaining: Option<usize>,
}

impl<'a> Combinations<'a> {
    /// Prepares the enumeration of `k`-subsets drawn from `pool`.
    ///
    /// # Errors
    /// Returns [`SubsetError::SizeExceedsPool`] when `k > pool.len()`.
    pub fn new(pool: &'a [Vertex], k: usize) -> Result<Self, SubsetError> {
        if k > pool.len() {
            return Err(SubsetError::SizeExceedsPool {
                k,
                available: pool.len(),
            });
        }
        Ok(Self {
            pool,
            indices: Some((0..k).collect()),
            remaining: binomial(pool.len(), k),
        })
    }
}

impl Iterator for Combinations<'_> {
    type Item = VertexSubset;

    fn next(&mut self) -> Option<Self::Item> {
        let pool = self.pool;
        let indices = self.indices.as_mut()?;
        let subset = indices
            .iter()
            .filter_map(|&index| pool.get(index).copied())
            .collect();
        if !advance(indices, pool.len()) {
            self.indices = None;
        }
        self.remaining = self.remaining.map(|left| left.saturating_sub(1));
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.indices.is_some(), self.remaining) {
            (false, _) => (0, Some(0)),
            (true, Some(left)) => (left, Some(left)),
            (true, None) => (0, None),
        }
    }
}

impl FusedIterator for Combinations<'_> {}

/// Moves `indices` to the next combination of `pool_len` elements.
///
/// Returns `false` when `indices` already holds the final combination.
fn advance(indices: &mut [usize], pool_len: usize) -> bool {
    let k = indices.len();
    let offset = pool_len - k;
    let Some(pivot) = (0..k).rev().find(|&slot| indices[slot] != slot + offset) else {
        return false;
    };
    indices[pivot] += 1;
    for slot in pivot + 1..k {
        indices[slot] = indices[slot - 1] + 1;
    }
    true
}

/// Collects every `k`-subset of `vertices` in lexicographic order.
///
/// # Errors
/// Returns [`SubsetError::SizeExceedsPool`] when `k > vertices.len()`.
///
/// # Examples
/// ```
/// use kconnect_core::enumerate_subsets;
///
/// let subsets = enumerate_subsets(&[4, 7, 9], 0).expect("k = 0 is valid");
/// assert_eq!(subsets, vec![Vec::<usize>::new()]);
/// ```
pub fn enumerate_subsets(vertices: &[Vertex], k: usize) -> Result<Vec<VertexSubset>, SubsetError> {
    Ok(Combinations::new(vertices, k)?.collect())
}

/// Number of `k`-subsets of an `n`-element set, or `None` on overflow.
///
/// # Examples
/// ```
/// use kconnect_core::binomial;
///
/// assert_eq!(binomial(8, 3), Some(56));
/// assert_eq!(binomial(3, 5), Some(0));
/// ```
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for step in 0..k {
        // Exact at every step: `result` is C(n, step) here.
        result = result.checked_mul(n - step)? / (step + 1);
    }
    Some(result)
}
