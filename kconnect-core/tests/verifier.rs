//! Tests for the `Verifier` driver API.

mod common;

use std::collections::BTreeMap;

use common::{verifier, verifier_with_oracle};
use kconnect_core::{
    ConnectivityBound, ExecutionStrategy, Graph, GraphSource, NamedGraph, OracleKind,
    SubsetErrorCode, VerifierBuilder, VerifierError, VerifierErrorCode, fixtures,
};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use kconnect_test_support::tracing::RecordingLayer;

#[fixture]
fn reference() -> NamedGraph {
    fixtures::reference().expect("reference graph is valid")
}

#[fixture]
fn cycle4() -> NamedGraph {
    fixtures::cycle(4).expect("4-cycle is valid")
}

#[fixture]
fn path3() -> NamedGraph {
    fixtures::path(3).expect("path is valid")
}

fn levels(pairs: &[(usize, bool)]) -> BTreeMap<usize, bool> {
    pairs.iter().copied().collect()
}

#[rstest]
fn builder_defaults() {
    let builder = VerifierBuilder::new();
    assert_eq!(builder.upper_bound(), 3);
    assert_eq!(builder.oracle(), OracleKind::Traversal);
    assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    assert!(builder.short_circuit());

    let verifier = builder.build().expect("defaults valid");
    assert_eq!(verifier.upper_bound().get(), 3);
    assert_eq!(verifier.oracle(), OracleKind::Traversal);
    assert_eq!(verifier.execution_strategy(), ExecutionStrategy::Sequential);
    assert!(verifier.short_circuit());
}

#[rstest]
fn builder_rejects_zero_upper_bound() {
    let err = VerifierBuilder::new()
        .with_upper_bound(0)
        .build()
        .expect_err("builder must reject a zero upper bound");
    assert!(matches!(err, VerifierError::InvalidUpperBound { got: 0 }));
    assert_eq!(err.code(), VerifierErrorCode::InvalidUpperBound);
}

#[rstest]
fn triangle_survives_every_removal() {
    let triangle = fixtures::triangle().expect("triangle is valid");
    let report = verifier(2, ExecutionStrategy::Sequential, true)
        .run(&triangle)
        .expect("2 <= 3");
    assert_eq!(report.as_map(), levels(&[(1, true), (2, true)]));
    assert!(report.first_failing_level().is_none());
    assert_eq!(report.bound(), ConnectivityBound::Exact(2));
}

#[rstest]
fn path_middle_vertex_is_a_cut(path3: NamedGraph) {
    let report = verifier(2, ExecutionStrategy::Sequential, false)
        .run(&path3)
        .expect("2 <= 3");
    assert_eq!(report.as_map(), levels(&[(1, false), (2, true)]));

    let first = report.level(1).expect("level 1 checked");
    assert_eq!(first.witness(), Some(&[1][..]));
    assert_eq!(first.subsets_examined(), 3);
    assert_eq!(first.cuts_found(), 1);
    assert_eq!(report.bound(), ConnectivityBound::Exact(1));
}

#[rstest]
fn four_cycle_fails_at_opposite_pair(cycle4: NamedGraph) {
    let report = verifier(2, ExecutionStrategy::Sequential, false)
        .run(&cycle4)
        .expect("2 <= 4");
    assert_eq!(report.as_map(), levels(&[(1, true), (2, false)]));

    let second = report.level(2).expect("level 2 checked");
    assert_eq!(second.witness(), Some(&[0, 2][..]));
    assert_eq!(second.subsets_examined(), 6);
    assert_eq!(second.cuts_found(), 2);
    assert_eq!(report.bound(), ConnectivityBound::Exact(2));
}

#[rstest]
fn reference_graph_is_four_connected(reference: NamedGraph) {
    let report = VerifierBuilder::new()
        .build()
        .expect("defaults valid")
        .run(&reference)
        .expect("3 <= 8");
    assert_eq!(report.as_map(), levels(&[(1, true), (2, true), (3, true)]));
    assert!(report.all_connected());
    assert!(report.base_connected());
    assert_eq!(report.min_degree(), Some(4));
    assert_eq!(report.upper_bound(), 3);
    assert_eq!(report.bound(), ConnectivityBound::Exact(4));
    let examined: Vec<_> = report
        .levels()
        .iter()
        .map(|level| level.subsets_examined())
        .collect();
    assert_eq!(examined, vec![8, 28, 56]);
}

#[rstest]
fn reference_graph_first_cut_has_four_vertices(reference: NamedGraph) {
    let exhaustive = verifier(4, ExecutionStrategy::Sequential, false)
        .run(&reference)
        .expect("4 <= 8");
    let fourth = exhaustive.level(4).expect("level 4 checked");
    assert_eq!(fourth.witness(), Some(&[0, 1, 2, 5][..]));
    assert_eq!(fourth.subsets_examined(), 70);
    assert_eq!(fourth.cuts_found(), 10);
    assert_eq!(exhaustive.bound(), ConnectivityBound::Exact(4));

    let short = verifier(4, ExecutionStrategy::Sequential, true)
        .run(&reference)
        .expect("4 <= 8");
    let fourth = short.level(4).expect("level 4 checked");
    assert_eq!(fourth.witness(), Some(&[0, 1, 2, 5][..]));
    assert_eq!(fourth.subsets_examined(), 3);
    assert_eq!(fourth.cuts_found(), 1);
}

#[rstest]
#[case::complete_pinned_by_degree(5, 4, ConnectivityBound::Exact(4))]
#[case::complete_above_bound(6, 2, ConnectivityBound::AtLeast(3))]
fn complete_graphs_never_fail(
    #[case] n: usize,
    #[case] upper_bound: usize,
    #[case] expected: ConnectivityBound,
) {
    let complete = fixtures::complete(n).expect("complete graph is valid");
    let report = verifier(upper_bound, ExecutionStrategy::Sequential, true)
        .run(&complete)
        .expect("upper bound fits");
    assert!(report.all_connected());
    assert_eq!(report.bound(), expected);
}

#[rstest]
fn disconnected_graph_has_zero_connectivity() {
    let split = Graph::from_edges(4, &[(0, 1), (2, 3)]).expect("two components");
    let report = verifier(1, ExecutionStrategy::Sequential, true)
        .run(&split)
        .expect("1 <= 4");
    assert!(!report.base_connected());
    assert_eq!(report.data_source(), "graph");
    assert_eq!(report.level(1).and_then(|level| level.witness()), Some(&[0][..]));
    assert_eq!(report.bound(), ConnectivityBound::Exact(0));
}

#[rstest]
fn run_rejects_upper_bound_above_vertex_count(path3: NamedGraph) {
    let err = verifier(4, ExecutionStrategy::Sequential, true)
        .run(&path3)
        .expect_err("4 > 3");
    assert!(matches!(
        err,
        VerifierError::UpperBoundExceedsVertexCount {
            ref data_source,
            upper_bound: 4,
            vertex_count: 3,
        } if &**data_source == "path3"
    ));
}

#[rstest]
fn verify_level_rejects_oversized_level(path3: NamedGraph) {
    let err = verifier(1, ExecutionStrategy::Sequential, true)
        .verify_level(&path3, 4)
        .expect_err("4 > 3");
    assert_eq!(err.code(), VerifierErrorCode::SubsetFailure);
    assert_eq!(err.subset_code(), Some(SubsetErrorCode::SizeExceedsPool));
}

#[rstest]
fn verify_level_zero_checks_the_unmodified_graph(cycle4: NamedGraph) {
    let outcome = verifier(1, ExecutionStrategy::Sequential, true)
        .verify_level(&cycle4, 0)
        .expect("level 0 is valid");
    assert!(outcome.connected());
    assert_eq!(outcome.subsets_examined(), 1);
}

#[rstest]
fn run_accepts_trait_objects(cycle4: NamedGraph) {
    let source: &dyn GraphSource = &cycle4;
    let report = verifier(1, ExecutionStrategy::Sequential, true)
        .run(source)
        .expect("1 <= 4");
    assert_eq!(report.data_source(), "cycle4");
    assert_eq!(report.vertex_count(), 4);
}

#[rstest]
#[case::reference(fixtures::reference(), 4)]
#[case::cycle(fixtures::cycle(7), 4)]
#[case::path(fixtures::path(6), 3)]
fn oracles_produce_identical_reports(
    #[case] source: Result<NamedGraph, kconnect_core::GraphError>,
    #[case] upper_bound: usize,
) {
    let source = source.expect("fixture is valid");
    let traversal = verifier_with_oracle(upper_bound, OracleKind::Traversal)
        .run(&source)
        .expect("upper bound fits");
    let matrix = verifier_with_oracle(upper_bound, OracleKind::MatrixPower)
        .run(&source)
        .expect("upper bound fits");
    assert_eq!(traversal, matrix);
}

#[rstest]
#[case::triangle(fixtures::triangle(), 2, &[(1, true), (2, true)], 2)]
#[case::path(fixtures::path(3), 2, &[(1, false), (2, true)], 1)]
#[case::cycle(fixtures::cycle(4), 2, &[(1, true), (2, false)], 2)]
#[case::complete(fixtures::complete(3), 1, &[(1, true)], 2)]
fn small_fixtures_match_under_both_oracles(
    #[case] source: Result<NamedGraph, kconnect_core::GraphError>,
    #[case] upper_bound: usize,
    #[case] expected: &[(usize, bool)],
    #[case] connectivity: usize,
) {
    let source = source.expect("fixture is valid");
    for oracle in [OracleKind::Traversal, OracleKind::MatrixPower] {
        let report = verifier_with_oracle(upper_bound, oracle)
            .run(&source)
            .expect("upper bound fits");
        assert_eq!(report.as_map(), levels(expected), "{}", oracle.as_str());
        assert_eq!(
            report.bound(),
            ConnectivityBound::Exact(connectivity),
            "{}",
            oracle.as_str()
        );
    }
}

#[rstest]
#[case::reference(fixtures::reference(), 5)]
#[case::cycle(fixtures::cycle(6), 3)]
#[case::path(fixtures::path(5), 2)]
fn short_circuit_agrees_with_exhaustive(
    #[case] source: Result<NamedGraph, kconnect_core::GraphError>,
    #[case] upper_bound: usize,
) {
    let source = source.expect("fixture is valid");
    let short = verifier(upper_bound, ExecutionStrategy::Sequential, true)
        .run(&source)
        .expect("upper bound fits");
    let exhaustive = verifier(upper_bound, ExecutionStrategy::Sequential, false)
        .run(&source)
        .expect("upper bound fits");
    assert_eq!(short.as_map(), exhaustive.as_map());
    for (left, right) in short.levels().iter().zip(exhaustive.levels()) {
        assert_eq!(left.witness(), right.witness());
        assert!(left.subsets_examined() <= right.subsets_examined());
    }
    assert_eq!(short.bound(), exhaustive.bound());
}

#[cfg(feature = "parallel")]
#[rstest]
#[case::reference(fixtures::reference(), 6)]
#[case::cycle(fixtures::cycle(8), 3)]
#[case::path(fixtures::path(6), 2)]
fn parallel_matches_sequential(
    #[case] source: Result<NamedGraph, kconnect_core::GraphError>,
    #[case] upper_bound: usize,
) {
    let source = source.expect("fixture is valid");
    let sequential = verifier(upper_bound, ExecutionStrategy::Sequential, false)
        .run(&source)
        .expect("upper bound fits");
    let parallel = verifier(upper_bound, ExecutionStrategy::Parallel, false)
        .run(&source)
        .expect("upper bound fits");
    assert_eq!(sequential, parallel);

    let short = verifier(upper_bound, ExecutionStrategy::Parallel, true)
        .run(&source)
        .expect("upper bound fits");
    assert_eq!(short.as_map(), sequential.as_map());
    for (left, right) in short.levels().iter().zip(sequential.levels()) {
        assert_eq!(left.witness(), right.witness());
    }
}

#[cfg(not(feature = "parallel"))]
#[rstest]
fn parallel_strategy_requires_feature() {
    let err = VerifierBuilder::new()
        .with_execution_strategy(ExecutionStrategy::Parallel)
        .build()
        .expect_err("parallel backend is compiled out");
    assert!(matches!(
        err,
        VerifierError::BackendUnavailable {
            requested: ExecutionStrategy::Parallel
        }
    ));
}

#[rstest]
fn run_records_core_tracing(reference: NamedGraph) {
    let verifier = verifier(3, ExecutionStrategy::Sequential, true);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let report = tracing::subscriber::with_default(subscriber, || verifier.run(&reference))
        .expect("run must succeed");
    assert!(report.all_connected());

    let run_span = layer.span_named("core.run").expect("core.run span must exist");
    assert_eq!(run_span.field("data_source"), Some("reference"));
    assert_eq!(run_span.field("vertices"), Some("8"));
    assert_eq!(run_span.field("upper_bound"), Some("3"));
    assert_eq!(run_span.field("oracle"), Some("traversal"));
    assert_eq!(run_span.field("strategy"), Some("Sequential"));

    let level_spans = layer.spans_named("core.verify_level");
    assert_eq!(level_spans.len(), 3);
    for (span, expected_level) in level_spans.iter().zip(["1", "2", "3"]) {
        assert_eq!(span.field("level"), Some(expected_level));
        assert_eq!(span.field("connected"), Some("true"));
    }
    assert_eq!(level_spans[2].field("subsets_examined"), Some("56"));

    assert!(layer.has_event(Level::INFO, "vertex connectivity verification complete"));
}

#[rstest]
fn run_logs_disconnected_input_warning() {
    let split = Graph::from_edges(3, &[(0, 1)]).expect("vertex 2 isolated");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let report = tracing::subscriber::with_default(subscriber, || {
        verifier(1, ExecutionStrategy::Sequential, true).run(&split)
    })
    .expect("1 <= 3");
    assert_eq!(report.bound(), ConnectivityBound::Exact(0));
    assert!(layer.has_event(Level::WARN, "graph is disconnected before any removal"));
}

#[rstest]
fn run_records_error_event_for_oversized_bound(path3: NamedGraph) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let result = tracing::subscriber::with_default(subscriber, || {
        verifier(5, ExecutionStrategy::Sequential, true).run(&path3)
    });
    assert!(result.is_err());
    assert!(layer.events().iter().any(|event| {
        event.level == Level::ERROR
            && event
                .field("error")
                .is_some_and(|message| message.contains("upper_bound is 5"))
    }));
}
