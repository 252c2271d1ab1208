//! Adjacency-list storage for simple undirected graphs.
//!
//! A [`Graph`] is validated once at construction: adjacency is symmetric,
//! loop-free and free of duplicate entries. Every transformation returns a new
//! graph, so a validated graph can be shared freely between checks.

use std::ops::Range;

use crate::error::GraphError;

/// Label of a vertex: its position in the adjacency sequence.
pub type Vertex = usize;

/// A simple undirected graph on the vertices `0..vertex_count`.
///
/// Neighbour lists are stored in ascending order.
///
/// # Examples
/// ```
/// use kconnect_core::Graph;
///
/// let path = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("path is valid");
/// assert_eq!(path.vertex_count(), 3);
/// assert_eq!(path.neighbours(1), Some(&[0, 2][..]));
/// assert_eq!(path.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Graph {
    adjacency: Vec<Vec<Vertex>>,
}

impl Graph {
    /// Returns the graph with no vertices.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            adjacency: Vec::new(),
        }
    }

    /// Builds a graph from one adjacency list per vertex.
    ///
    /// Entries may be given in any order; they are sorted on construction.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for a label outside the vertex
    /// range, [`GraphError::SelfLoop`] when a vertex lists itself,
    /// [`GraphError::DuplicateNeighbour`] for repeated entries, and
    /// [`GraphError::Asymmetric`] when an edge is only listed on one side.
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::{Graph, GraphError};
    ///
    /// let triangle = Graph::from_adjacency(vec![vec![2, 1], vec![0, 2], vec![1, 0]])
    ///     .expect("triangle is symmetric");
    /// assert_eq!(triangle.neighbours(0), Some(&[1, 2][..]));
    ///
    /// let err = Graph::from_adjacency(vec![vec![1], vec![]]).expect_err("one-sided edge");
    /// assert_eq!(err, GraphError::Asymmetric { vertex: 0, neighbour: 1 });
    /// ```
    pub fn from_adjacency(mut adjacency: Vec<Vec<Vertex>>) -> Result<Self, GraphError> {
        let vertex_count = adjacency.len();
        for (vertex, neighbours) in adjacency.iter_mut().enumerate() {
            for &neighbour in neighbours.iter() {
                if neighbour >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        neighbour,
                        vertex_count,
                    });
                }
                if neighbour == vertex {
                    return Err(GraphError::SelfLoop { vertex });
                }
            }
            neighbours.sort_unstable();
            if let Some(pair) = neighbours.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(GraphError::DuplicateNeighbour {
                    vertex,
                    neighbour: pair[0],
                });
            }
        }

        for (vertex, neighbours) in adjacency.iter().enumerate() {
            for &neighbour in neighbours {
                let listed_back = adjacency
                    .get(neighbour)
                    .is_some_and(|reverse| reverse.binary_search(&vertex).is_ok());
                if !listed_back {
                    return Err(GraphError::Asymmetric { vertex, neighbour });
                }
            }
        }

        Ok(Self { adjacency })
    }

    /// Builds a graph on `vertex_count` vertices from undirected edge pairs.
    ///
    /// # Errors
    /// Returns the same errors as [`Self::from_adjacency`]. Listing the same
    /// edge twice, in either orientation, is a [`GraphError::DuplicateNeighbour`].
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::{Graph, GraphError};
    ///
    /// let err = Graph::from_edges(2, &[(0, 1), (1, 0)]).expect_err("edge listed twice");
    /// assert!(matches!(err, GraphError::DuplicateNeighbour { .. }));
    /// ```
    pub fn from_edges(vertex_count: usize, edges: &[(Vertex, Vertex)]) -> Result<Self, GraphError> {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(left, right) in edges {
            for (vertex, neighbour) in [(left, right), (right, left)] {
                let row = adjacency
                    .get_mut(vertex)
                    .ok_or(GraphError::VertexOutOfRange {
                        vertex: neighbour,
                        neighbour: vertex,
                        vertex_count,
                    })?;
                row.push(neighbour);
            }
        }
        Self::from_adjacency(adjacency)
    }

    /// Returns a copy of this graph with the extra edge `{left, right}`.
    ///
    /// # Errors
    /// Fails when the edge is a loop, already present, or out of range.
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::Graph;
    ///
    /// let path = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("path is valid");
    /// let triangle = path.with_edge(0, 2).expect("edge is new");
    /// assert_eq!(triangle.edge_count(), 3);
    /// assert_eq!(path.edge_count(), 2);
    /// ```
    pub fn with_edge(&self, left: Vertex, right: Vertex) -> Result<Self, GraphError> {
        let mut adjacency = self.adjacency.clone();
        let vertex_count = adjacency.len();
        for (vertex, neighbour) in [(left, right), (right, left)] {
            adjacency
                .get_mut(vertex)
                .ok_or(GraphError::VertexOutOfRange {
                    vertex: neighbour,
                    neighbour: vertex,
                    vertex_count,
                })?
                .push(neighbour);
        }
        Self::from_adjacency(adjacency)
    }

    /// Wraps rows that are already sorted, symmetric and loop-free.
    pub(crate) fn from_validated_rows(adjacency: Vec<Vec<Vertex>>) -> Self {
        debug_assert!(Self::from_adjacency(adjacency.clone()).is_ok());
        Self { adjacency }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// The vertex labels `0..vertex_count`.
    #[must_use]
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.adjacency.len()
    }

    /// Ascending neighbours of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: Vertex) -> Option<&[Vertex]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Degree of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn degree(&self, vertex: Vertex) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Smallest vertex degree, or `None` for the empty graph.
    ///
    /// Vertex connectivity never exceeds this value.
    #[must_use]
    pub fn min_degree(&self) -> Option<usize> {
        self.adjacency.iter().map(Vec::len).min()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterates every edge once as `(low, high)` in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(vertex, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |&&neighbour| vertex < neighbour)
                    .map(move |&neighbour| (vertex, neighbour))
            })
    }

    /// Iterates adjacency rows in vertex order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Vertex]> + '_ {
        self.adjacency.iter().map(Vec::as_slice)
    }
}
