//! Unit and property tests for the connectivity oracles.

use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::{
    fixtures,
    induce::induce,
    subsets::Combinations,
    test_utils::{all_pairs, graph_strategy, suite_proptest_config},
};

fn both() -> [OracleKind; 2] {
    [OracleKind::Traversal, OracleKind::MatrixPower]
}

#[rstest]
#[case::empty(Graph::empty())]
#[case::single_vertex(Graph::from_edges(1, &[]).expect("one vertex"))]
#[case::single_edge(Graph::from_edges(2, &[(0, 1)]).expect("one edge"))]
fn boundary_graphs_are_connected(#[case] graph: Graph) {
    for oracle in both() {
        assert!(oracle.is_connected(&graph), "{} disagrees", oracle.name());
    }
}

#[rstest]
#[case::two_isolated(Graph::from_edges(2, &[]).expect("no edges"))]
#[case::split_pairs(Graph::from_edges(4, &[(0, 1), (2, 3)]).expect("two components"))]
#[case::isolated_last(Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0)]).expect("vertex 3 isolated"))]
fn disconnected_graphs_are_detected(#[case] graph: Graph) {
    for oracle in both() {
        assert!(!oracle.is_connected(&graph), "{} disagrees", oracle.name());
    }
}

#[test]
fn path_of_three_loses_connectivity_without_its_middle() {
    let path = fixtures::path(3).expect("path is valid").into_graph();
    let induced = induce(&path, &[1]).expect("vertex 1 exists");
    for oracle in both() {
        assert!(oracle.is_connected(&path));
        assert!(!oracle.is_connected(induced.graph()));
    }
}

#[test]
fn matrix_power_saturates_without_losing_connectivity() {
    // Walk counts in K₃₀ exceed u64::MAX long before the final power.
    let complete = fixtures::complete(30).expect("complete graph").into_graph();
    assert!(MatrixPowerOracle.is_connected(&complete));

    let adjacency = AdjacencyMatrix::from_graph(&complete);
    let mut power = adjacency.clone();
    for _ in 0..20 {
        power = power.multiply(&adjacency);
    }
    assert_eq!(power.get(0, 1), Some(u64::MAX));
}

#[test]
fn matrix_power_counts_closed_walks_on_a_single_edge() {
    let edge = Graph::from_edges(2, &[(0, 1)]).expect("one edge");
    let adjacency = AdjacencyMatrix::from_graph(&edge);
    assert_eq!(adjacency.get(0, 0), Some(0));
    // Only A² reaches the diagonal, so the sum must include the n-th power.
    assert_eq!(adjacency.multiply(&adjacency).get(0, 0), Some(1));
    assert!(MatrixPowerOracle.is_connected(&edge));
}

#[test]
fn accumulator_requires_every_pair() {
    let split = Graph::from_edges(3, &[(0, 1)]).expect("vertex 2 isolated");
    let adjacency = AdjacencyMatrix::from_graph(&split);
    let mut accumulator = ReachabilityAccumulator::new(adjacency.order());
    accumulator.accumulate(&adjacency);
    accumulator.accumulate(&adjacency.multiply(&adjacency));
    assert!(!accumulator.into_verdict());
}

#[test]
fn oracles_agree_on_every_reference_subgraph() {
    let reference = fixtures::reference().expect("reference graph").into_graph();
    let vertices: Vec<_> = reference.vertices().collect();
    for k in 0..=vertices.len() {
        for removed in Combinations::new(&vertices, k).expect("k <= n") {
            let induced = induce(&reference, &removed).expect("removal set is valid");
            assert_eq!(
                TraversalOracle.is_connected(induced.graph()),
                MatrixPowerOracle.is_connected(induced.graph()),
                "oracles disagree after removing {removed:?}",
            );
        }
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn traversal_matches_matrix_power(graph in graph_strategy(0..=10)) {
        prop_assert_eq!(
            TraversalOracle.is_connected(&graph),
            MatrixPowerOracle.is_connected(&graph)
        );
    }

    #[test]
    fn adding_an_edge_preserves_connectivity(graph in graph_strategy(2..=8)) {
        prop_assume!(TraversalOracle.is_connected(&graph));
        for (left, right) in all_pairs(graph.vertex_count()) {
            let Ok(denser) = graph.with_edge(left, right) else {
                continue;
            };
            for oracle in both() {
                prop_assert!(oracle.is_connected(&denser), "{} disagrees", oracle.name());
            }
        }
    }
}
