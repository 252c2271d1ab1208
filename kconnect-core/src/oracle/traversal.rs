//! Breadth-first connectivity check.
use std::collections::VecDeque;

use super::ConnectivityOracle;
use crate::graph::{Graph, Vertex};

/// Connectivity by breadth-first traversal from vertex `0`.
///
/// # Examples
/// ```
/// use kconnect_core::{ConnectivityOracle, Graph, TraversalOracle};
///
/// let split = Graph::from_edges(4, &[(0, 1), (2, 3)]).expect("two components");
/// assert!(!TraversalOracle.is_connected(&split));
/// assert!(TraversalOracle.is_connected(&Graph::empty()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOracle;

impl TraversalOracle {
    /// Name reported by [`ConnectivityOracle::name`].
    pub const NAME: &'static str = "traversal";
}

impl ConnectivityOracle for TraversalOracle {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_connected(&self, graph: &Graph) -> bool {
        let vertex_count = graph.vertex_count();
        if vertex_count <= 1 {
            return true;
        }

        let mut context = BfsContext::new(vertex_count);
        context.visit(0);
        while let Some(vertex) = context.queue.pop_front() {
            for &neighbour in graph.neighbours(vertex).unwrap_or_default() {
                context.visit(neighbour);
            }
        }
        context.visited_count == vertex_count
    }
}

struct BfsContext {
    visited: Vec<bool>,
    queue: VecDeque<Vertex>,
    visited_count: usize,
}

impl BfsContext {
    fn new(capacity: usize) -> Self {
        Self {
            visited: vec![false; capacity],
            queue: VecDeque::with_capacity(capacity),
            visited_count: 0,
        }
    }

    fn visit(&mut self, vertex: Vertex) {
        match self.visited.get_mut(vertex) {
            Some(seen) if !*seen => {
                *seen = true;
                self.visited_count += 1;
                self.queue.push_back(vertex);
            }
            _ => {}
        }
    }
}
