//! Connectivity oracles deciding whether a graph is connected.
//!
//! Two interchangeable implementations share the [`ConnectivityOracle`]
//! trait:
//!
//! - [`TraversalOracle`] runs a breadth-first traversal from vertex `0` and
//!   compares the visited count to the vertex count. It is linear in the size
//!   of the graph and is the default.
//! - [`MatrixPowerOracle`] sums the powers `A¹ … Aⁿ` of the adjacency matrix
//!   and declares the graph connected when every entry is nonzero. It is cubic
//!   per multiplication and serves as a reference for validation.
//!
//! Both treat the empty graph and the single-vertex graph as connected.

mod matrix;
mod traversal;

pub use matrix::{AdjacencyMatrix, MatrixPowerOracle, ReachabilityAccumulator};
pub use traversal::TraversalOracle;

use crate::graph::Graph;

/// Decides whether a graph is connected.
pub trait ConnectivityOracle {
    /// Short stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `true` when every vertex can reach every other vertex.
    fn is_connected(&self, graph: &Graph) -> bool;
}

/// Selects which [`ConnectivityOracle`] a verifier runs.
///
/// # Examples
/// ```
/// use kconnect_core::{ConnectivityOracle, Graph, OracleKind};
///
/// let path = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("path is valid");
/// for oracle in [OracleKind::Traversal, OracleKind::MatrixPower] {
///     assert!(oracle.is_connected(&path));
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OracleKind {
    /// Breadth-first traversal.
    #[default]
    Traversal,
    /// Sum of adjacency-matrix powers.
    MatrixPower,
}

impl OracleKind {
    /// Stable label for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Traversal => TraversalOracle::NAME,
            Self::MatrixPower => MatrixPowerOracle::NAME,
        }
    }
}

impl ConnectivityOracle for OracleKind {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn is_connected(&self, graph: &Graph) -> bool {
        match self {
            Self::Traversal => TraversalOracle.is_connected(graph),
            Self::MatrixPower => MatrixPowerOracle.is_connected(graph),
        }
    }
}

#[cfg(test)]
mod tests;
