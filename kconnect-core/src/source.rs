//! Graph source abstraction consumed by the verifier.

use crate::graph::Graph;

/// Anything that provides a validated [`Graph`] under a human-readable name.
///
/// # Examples
/// ```
/// use kconnect_core::{Graph, GraphSource};
///
/// struct Edge(Graph);
///
/// impl GraphSource for Edge {
///     fn name(&self) -> &str { "edge" }
///     fn graph(&self) -> &Graph { &self.0 }
/// }
///
/// let source = Edge(Graph::from_edges(2, &[(0, 1)]).expect("valid"));
/// assert_eq!(source.name(), "edge");
/// assert_eq!(source.graph().edge_count(), 1);
/// ```
pub trait GraphSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the graph to analyse.
    fn graph(&self) -> &Graph;
}

/// A [`Graph`] paired with a display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedGraph {
    name: String,
    graph: Graph,
}

impl NamedGraph {
    /// Wraps `graph` under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, graph: Graph) -> Self {
        Self {
            name: name.into(),
            graph,
        }
    }

    /// Consumes the wrapper, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl GraphSource for NamedGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl GraphSource for Graph {
    fn name(&self) -> &str {
        "graph"
    }

    fn graph(&self) -> &Graph {
        self
    }
}
