//! Seeded graph generators for the benchmarks.
//!
//! Two families are provided: Erdős–Rényi `G(n, p)` graphs for oracle
//! throughput, and circulant graphs whose vertex connectivity is known in
//! advance, so verifier runs can be sized to hit or miss a cut on purpose.

use kconnect_core::{Graph, GraphError, NamedGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors raised while generating benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The edge probability was outside `[0, 1]`.
    #[error("edge probability must lie in [0, 1] (got {probability})")]
    InvalidProbability {
        /// The rejected probability.
        probability: f64,
    },
    /// The circulant offset would wrap onto an existing edge.
    #[error("circulant reach {reach} needs more than {vertex_count} vertices")]
    ReachTooLarge {
        /// Largest neighbour offset requested.
        reach: usize,
        /// Number of vertices requested.
        vertex_count: usize,
    },
    /// Graph construction rejected the generated edges.
    #[error("generated graph is invalid: {0}")]
    Graph(#[from] GraphError),
}

/// Configuration for `G(n, p)` generation.
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Independent probability of each possible edge.
    pub edge_probability: f64,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// Generates a `G(n, p)` graph.
///
/// # Errors
/// Returns [`SyntheticError::ZeroVertices`] or
/// [`SyntheticError::InvalidProbability`] for invalid configurations.
pub fn random_graph(config: &RandomGraphConfig) -> Result<NamedGraph, SyntheticError> {
    let RandomGraphConfig {
        vertex_count,
        edge_probability,
        seed,
    } = *config;
    if vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(SyntheticError::InvalidProbability {
            probability: edge_probability,
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let edges: Vec<_> = (0..vertex_count)
        .flat_map(|left| (left + 1..vertex_count).map(move |right| (left, right)))
        .filter(|_| rng.gen_bool(edge_probability))
        .collect();
    Ok(NamedGraph::new(
        format!("gnp{vertex_count}-seed{seed}"),
        Graph::from_edges(vertex_count, &edges)?,
    ))
}

/// Generates the circulant graph joining each vertex `i` to `i ± 1..=reach`.
///
/// The result is `2·reach`-regular with vertex connectivity `2·reach`.
///
/// # Errors
/// Returns [`SyntheticError::ZeroVertices`] for an empty request and
/// [`SyntheticError::ReachTooLarge`] unless `0 < 2·reach < vertex_count`.
///
/// # Examples
/// ```
/// use kconnect_benches::source::circulant;
/// use kconnect_core::GraphSource;
///
/// let graph = circulant(10, 2).expect("2·2 < 10");
/// assert_eq!(graph.graph().min_degree(), Some(4));
/// ```
pub fn circulant(vertex_count: usize, reach: usize) -> Result<NamedGraph, SyntheticError> {
    if vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if reach == 0 || reach.saturating_mul(2) >= vertex_count {
        return Err(SyntheticError::ReachTooLarge {
            reach,
            vertex_count,
        });
    }
    let edges: Vec<_> = (0..vertex_count)
        .flat_map(|vertex| {
            (1..=reach).map(move |offset| (vertex, (vertex + offset) % vertex_count))
        })
        .collect();
    Ok(NamedGraph::new(
        format!("circulant{vertex_count}-{reach}"),
        Graph::from_edges(vertex_count, &edges)?,
    ))
}
