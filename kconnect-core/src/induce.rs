//! Induced subgraphs obtained by deleting a vertex subset.
//!
//! The surviving vertices keep their relative order and are relabelled onto
//! `0..survivors`. The result is built as a fresh graph; the source graph is
//! never touched.

use tracing::instrument;

use crate::{
    error::InduceError,
    graph::{Graph, Vertex},
};

/// A graph left behind after deleting a vertex subset.
///
/// Vertex `i` of [`Self::graph`] corresponds to original vertex
/// `survivors()[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InducedSubgraph {
    graph: Graph,
    survivors: Vec<Vertex>,
}

impl InducedSubgraph {
    /// The relabelled graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Original labels of the surviving vertices, ascending.
    #[must_use]
    pub fn survivors(&self) -> &[Vertex] {
        &self.survivors
    }

    /// Original label of relabelled vertex `vertex`.
    #[must_use]
    pub fn original_label(&self, vertex: Vertex) -> Option<Vertex> {
        self.survivors.get(vertex).copied()
    }

    /// Consumes the subgraph, returning the relabelled graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

enum Slot {
    Removed,
    Kept(Vertex),
}

/// Order-preserving map from surviving original labels to `0..survivors`.
struct Relabeling {
    slots: Vec<Slot>,
    survivors: Vec<Vertex>,
}

impl Relabeling {
    fn new(removed: &[bool]) -> Self {
        let mut survivors = Vec::with_capacity(removed.len());
        let slots = removed
            .iter()
            .enumerate()
            .map(|(original, &is_removed)| {
                if is_removed {
                    Slot::Removed
                } else {
                    survivors.push(original);
                    Slot::Kept(survivors.len() - 1)
                }
            })
            .collect();
        Self { slots, survivors }
    }

    fn relabel_row(&self, graph: &Graph, original: Vertex) -> Result<Vec<Vertex>, InduceError> {
        let neighbours = graph
            .neighbours(original)
            .ok_or(InduceError::RelabelInvariant { original })?;
        let mut row = Vec::with_capacity(neighbours.len());
        for &neighbour in neighbours {
            match self.slots.get(neighbour) {
                Some(Slot::Removed) => {}
                Some(&Slot::Kept(label)) if label < self.survivors.len() => row.push(label),
                _ => {
                    return Err(InduceError::RelabelInvariant {
                        original: neighbour,
                    });
                }
            }
        }
        Ok(row)
    }
}

/// Deletes `removed` from `graph` and relabels the survivors.
///
/// `removed` may be given in any order. Removing every vertex yields the empty
/// graph; removing none yields a graph equal to `graph`.
///
/// # Errors
/// Returns [`InduceError::RemovalOutOfRange`] for labels outside the graph,
/// [`InduceError::DuplicateRemoval`] for repeated labels, and
/// [`InduceError::RelabelInvariant`] if a surviving neighbour cannot be
/// mapped into the new range.
///
/// # Examples
/// ```
/// use kconnect_core::{Graph, induce};
///
/// let cycle = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).expect("4-cycle");
/// let induced = induce(&cycle, &[1]).expect("vertex 1 exists");
/// assert_eq!(induced.survivors(), &[0, 2, 3]);
/// // Original edges 2-3 and 3-0 become 1-2 and 2-0.
/// assert_eq!(induced.graph().neighbours(2), Some(&[0, 1][..]));
/// ```
#[instrument(level = "trace", skip(graph), err)]
pub fn induce(graph: &Graph, removed: &[Vertex]) -> Result<InducedSubgraph, InduceError> {
    let vertex_count = graph.vertex_count();
    let mut is_removed = vec![false; vertex_count];
    for &vertex in removed {
        let slot = is_removed
            .get_mut(vertex)
            .ok_or(InduceError::RemovalOutOfRange {
                vertex,
                vertex_count,
            })?;
        if *slot {
            return Err(InduceError::DuplicateRemoval { vertex });
        }
        *slot = true;
    }

    let relabeling = Relabeling::new(&is_removed);
    let rows = relabeling
        .survivors
        .iter()
        .map(|&original| relabeling.relabel_row(graph, original))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InducedSubgraph {
        graph: Graph::from_validated_rows(rows),
        survivors: relabeling.survivors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{graph_strategy, suite_proptest_config};

    use proptest::prelude::*;
    use rstest::rstest;

    fn cycle4() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).expect("4-cycle is valid")
    }

    #[test]
    fn empty_removal_is_identity() {
        let graph = cycle4();
        let induced = induce(&graph, &[]).expect("nothing removed");
        assert_eq!(induced.graph(), &graph);
        assert_eq!(induced.survivors(), &[0, 1, 2, 3]);
    }

    #[test]
    fn removing_everything_yields_empty_graph() {
        let induced = induce(&cycle4(), &[3, 1, 0, 2]).expect("all labels valid");
        assert!(induced.graph().is_empty());
        assert!(induced.survivors().is_empty());
    }

    #[test]
    fn removal_order_does_not_matter() {
        let graph = cycle4();
        let forward = induce(&graph, &[0, 2]).expect("valid");
        let backward = induce(&graph, &[2, 0]).expect("valid");
        assert_eq!(forward, backward);
        assert_eq!(forward.graph().edge_count(), 0);
        assert_eq!(forward.original_label(1), Some(3));
        assert_eq!(forward.original_label(2), None);
    }

    #[rstest]
    #[case::out_of_range(&[4], InduceError::RemovalOutOfRange { vertex: 4, vertex_count: 4 })]
    #[case::duplicate(&[1, 3, 1], InduceError::DuplicateRemoval { vertex: 1 })]
    fn rejects_invalid_removal_sets(#[case] removed: &[Vertex], #[case] expected: InduceError) {
        let err = induce(&cycle4(), removed).expect_err("removal set is invalid");
        assert_eq!(err, expected);
    }

    proptest! {
        #![proptest_config(suite_proptest_config(128))]

        #[test]
        fn relabeling_is_an_order_preserving_bijection(
            (graph, removed) in graph_strategy(0..=9).prop_flat_map(|graph| {
                let n = graph.vertex_count();
                (Just(graph), proptest::sample::subsequence((0..n).collect::<Vec<_>>(), 0..=n))
            })
        ) {
            let induced = induce(&graph, &removed).expect("removal set is valid");
            let survivors = induced.survivors();

            prop_assert_eq!(induced.graph().vertex_count(), graph.vertex_count() - removed.len());
            prop_assert_eq!(survivors.len(), induced.graph().vertex_count());
            prop_assert!(survivors.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(survivors.iter().all(|vertex| !removed.contains(vertex)));

            for (new_label, &original) in survivors.iter().enumerate() {
                let expected: Vec<Vertex> = graph
                    .neighbours(original)
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|neighbour| survivors.binary_search(neighbour).ok())
                    .collect();
                prop_assert_eq!(induced.graph().neighbours(new_label), Some(expected.as_slice()));
            }
        }
    }
}
