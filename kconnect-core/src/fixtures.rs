//! Named graphs used as inputs for the CLI, tests and benchmarks.
//!
//! Every builder validates its output through [`Graph`] construction, so the
//! parameterised families report degenerate sizes (for instance a cycle on
//! two vertices, which would need a duplicate edge) as [`GraphError`]s.

use crate::{
    error::GraphError,
    graph::{Graph, Vertex},
    source::NamedGraph,
};

/// Adjacency lists of the 8-vertex 4-regular graph whose vertex connectivity
/// is 4.
const REFERENCE_ADJACENCY: [[Vertex; 4]; 8] = [
    [1, 4, 6, 7],
    [0, 2, 3, 7],
    [1, 3, 4, 6],
    [1, 2, 4, 5],
    [0, 2, 3, 5],
    [3, 4, 6, 7],
    [0, 2, 5, 7],
    [0, 1, 5, 6],
];

/// The 8-vertex 4-regular reference graph.
///
/// No removal of three or fewer vertices disconnects it.
///
/// # Errors
/// Never fails in practice; the adjacency is validated like any other input.
///
/// # Examples
/// ```
/// use kconnect_core::{GraphSource, fixtures};
///
/// let reference = fixtures::reference().expect("reference graph is valid");
/// assert_eq!(reference.graph().vertex_count(), 8);
/// assert_eq!(reference.graph().min_degree(), Some(4));
/// ```
pub fn reference() -> Result<NamedGraph, GraphError> {
    let adjacency = REFERENCE_ADJACENCY.iter().map(|row| row.to_vec()).collect();
    Ok(NamedGraph::new("reference", Graph::from_adjacency(adjacency)?))
}

/// The triangle `K₃`.
///
/// # Errors
/// Never fails in practice.
pub fn triangle() -> Result<NamedGraph, GraphError> {
    Ok(NamedGraph::new(
        "triangle",
        Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)])?,
    ))
}

/// The path `0 - 1 - … - (n-1)`.
///
/// # Errors
/// Never fails in practice.
pub fn path(n: usize) -> Result<NamedGraph, GraphError> {
    let edges: Vec<_> = (1..n).map(|vertex| (vertex - 1, vertex)).collect();
    Ok(NamedGraph::new(format!("path{n}"), Graph::from_edges(n, &edges)?))
}

/// The cycle `0 - 1 - … - (n-1) - 0`.
///
/// # Errors
/// Returns [`GraphError::SelfLoop`] for `n == 1` and
/// [`GraphError::DuplicateNeighbour`] for `n == 2`.
pub fn cycle(n: usize) -> Result<NamedGraph, GraphError> {
    let edges: Vec<_> = (0..n).map(|vertex| (vertex, (vertex + 1) % n)).collect();
    Ok(NamedGraph::new(format!("cycle{n}"), Graph::from_edges(n, &edges)?))
}

/// The complete graph `Kₙ`.
///
/// # Errors
/// Never fails in practice.
pub fn complete(n: usize) -> Result<NamedGraph, GraphError> {
    let edges: Vec<_> = (0..n)
        .flat_map(|left| (left + 1..n).map(move |right| (left, right)))
        .collect();
    Ok(NamedGraph::new(
        format!("complete{n}"),
        Graph::from_edges(n, &edges)?,
    ))
}
