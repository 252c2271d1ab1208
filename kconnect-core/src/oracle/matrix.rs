//! Connectivity by summing powers of the adjacency matrix.
//!
//! Entry `(i, j)` of `Aᵏ` counts the walks of length `k` from `i` to `j`. In a
//! connected graph on `n ≥ 2` vertices every pair is joined by a path of
//! length at most `n - 1`, and every vertex has a closed walk of length 2
//! through a neighbour. The graph is therefore connected exactly when every
//! entry of `A¹ + … + Aⁿ` is nonzero, diagonal included.
//!
//! Walk counts grow exponentially with `n`. Arithmetic saturates at
//! `u64::MAX` instead of wrapping: a saturated entry stays nonzero, which is
//! the only property the verdict depends on.

use super::ConnectivityOracle;
use crate::graph::Graph;

/// Square 0/1 matrix equivalent to a [`Graph`], or a power of one.
///
/// # Examples
/// ```
/// use kconnect_core::{AdjacencyMatrix, Graph};
///
/// let path = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("path is valid");
/// let matrix = AdjacencyMatrix::from_graph(&path);
/// assert_eq!(matrix.get(0, 1), Some(1));
/// assert_eq!(matrix.get(0, 2), Some(0));
/// // One walk of length two joins the endpoints.
/// assert_eq!(matrix.multiply(&matrix).get(0, 2), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: usize,
    cells: Vec<u64>,
}

impl AdjacencyMatrix {
    /// Builds the adjacency matrix of `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let order = graph.vertex_count();
        let mut cells = vec![0; order * order];
        if order > 0 {
            for (row, neighbours) in cells.chunks_mut(order).zip(graph.rows()) {
                for &neighbour in neighbours {
                    if let Some(cell) = row.get_mut(neighbour) {
                        *cell = 1;
                    }
                }
            }
        }
        Self { order, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Entry at `(row, column)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<u64> {
        if row >= self.order || column >= self.order {
            return None;
        }
        self.cells.get(row * self.order + column).copied()
    }

    /// Saturating matrix product `self × rhs`.
    ///
    /// Both operands must share the same order; the result has the order of
    /// `self`.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        let order = self.order;
        let mut cells = vec![0_u64; order * order];
        if order == 0 {
            return Self { order, cells };
        }
        for (out_row, lhs_row) in cells.chunks_mut(order).zip(self.cells.chunks(order)) {
            for (&weight, rhs_row) in lhs_row.iter().zip(rhs.cells.chunks(order)) {
                if weight == 0 {
                    continue;
                }
                for (out, &value) in out_row.iter_mut().zip(rhs_row) {
                    *out = out.saturating_add(weight.saturating_mul(value));
                }
            }
        }
        Self { order, cells }
    }
}

/// Running sum of adjacency-matrix powers.
///
/// Consumed by [`Self::into_verdict`] once every power has been added.
#[derive(Debug, Clone)]
pub struct ReachabilityAccumulator {
    order: usize,
    sums: Vec<u64>,
}

impl ReachabilityAccumulator {
    /// Starts an all-zero accumulator for matrices of `order`.
    #[must_use]
    pub fn new(order: usize) -> Self {
        Self {
            order,
            sums: vec![0; order * order],
        }
    }

    /// Adds `power` entry-wise, saturating at `u64::MAX`.
    pub fn accumulate(&mut self, power: &AdjacencyMatrix) {
        debug_assert_eq!(power.order, self.order);
        for (sum, &count) in self.sums.iter_mut().zip(&power.cells) {
            *sum = sum.saturating_add(count);
        }
    }

    /// Returns `true` when every ordered pair has at least one walk.
    #[must_use]
    pub fn into_verdict(self) -> bool {
        self.sums.iter().all(|&sum| sum != 0)
    }
}

/// Connectivity by summing adjacency-matrix powers.
///
/// # Examples
/// ```
/// use kconnect_core::{ConnectivityOracle, Graph, MatrixPowerOracle};
///
/// let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).expect("triangle");
/// assert!(MatrixPowerOracle.is_connected(&triangle));
/// let split = Graph::from_edges(3, &[(0, 1)]).expect("isolated vertex 2");
/// assert!(!MatrixPowerOracle.is_connected(&split));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixPowerOracle;

impl MatrixPowerOracle {
    /// Name reported by [`ConnectivityOracle::name`].
    pub const NAME: &'static str = "matrix-power";
}

impl ConnectivityOracle for MatrixPowerOracle {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_connected(&self, graph: &Graph) -> bool {
        let order = graph.vertex_count();
        // The lone diagonal entry of a 1×1 matrix is zero without self-loops.
        if order <= 1 {
            return true;
        }

        let adjacency = AdjacencyMatrix::from_graph(graph);
        let mut accumulator = ReachabilityAccumulator::new(order);
        accumulator.accumulate(&adjacency);
        let mut power = adjacency.clone();
        for _ in 2..=order {
            power = power.multiply(&adjacency);
            accumulator.accumulate(&power);
        }
        accumulator.into_verdict()
    }
}
