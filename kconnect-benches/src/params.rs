//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion benchmark id.

use std::fmt;

/// Parameters for an oracle benchmark run.
#[derive(Clone, Debug)]
pub struct OracleBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edge probability of the generated graph, in percent.
    pub edge_percent: u8,
}

impl fmt::Display for OracleBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}%", self.vertex_count, self.edge_percent)
    }
}

/// Parameters for a verifier benchmark run.
#[derive(Clone, Debug)]
pub struct VerifierBenchParams {
    /// Number of vertices in the circulant graph.
    pub vertex_count: usize,
    /// Largest removal size checked.
    pub upper_bound: usize,
    /// Whether levels stop at their first cut.
    pub short_circuit: bool,
}

impl fmt::Display for VerifierBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.short_circuit { "short" } else { "full" };
        write!(f, "n={},K={},{mode}", self.vertex_count, self.upper_bound)
    }
}
