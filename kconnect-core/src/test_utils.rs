//! Shared test utilities for `kconnect-core`.

use std::ops::RangeInclusive;

use kconnect_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::{prelude::*, test_runner::Config as ProptestConfig};

use crate::graph::{Graph, Vertex};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Random simple graphs whose vertex count is drawn from `vertices`.
///
/// Each of the `n(n-1)/2` possible edges is present with probability 0.6,
/// which keeps a healthy mix of connected and disconnected samples.
pub(crate) fn graph_strategy(vertices: RangeInclusive<usize>) -> impl Strategy<Value = Graph> {
    vertices.prop_flat_map(|n| {
        let pairs = all_pairs(n);
        proptest::collection::vec(proptest::bool::weighted(0.6), pairs.len()).prop_map(
            move |mask| {
                let edges: Vec<_> = pairs
                    .iter()
                    .zip(mask)
                    .filter_map(|(&pair, keep)| keep.then_some(pair))
                    .collect();
                Graph::from_edges(n, &edges).expect("generated pairs form a simple graph")
            },
        )
    })
}

/// Every unordered pair `(u, v)` with `u < v < n`.
pub(crate) fn all_pairs(n: usize) -> Vec<(Vertex, Vertex)> {
    (0..n)
        .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
        .collect()
}
