//! kconnect core library.
//!
//! Verifies the vertex connectivity of small undirected graphs by brute
//! force: every vertex subset of size `1..=K` is removed in turn and the
//! remaining induced subgraph is checked for connectivity.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
pub mod fixtures;
mod graph;
mod induce;
mod oracle;
mod report;
mod source;
mod subsets;
#[cfg(test)]
mod test_utils;
mod verifier;

pub use crate::{
    builder::{DEFAULT_UPPER_BOUND, ExecutionStrategy, VerifierBuilder},
    error::{
        GraphError, GraphErrorCode, InduceError, InduceErrorCode, Result, SubsetError,
        SubsetErrorCode, VerifierError, VerifierErrorCode,
    },
    graph::{Graph, Vertex},
    induce::{InducedSubgraph, induce},
    oracle::{
        AdjacencyMatrix, ConnectivityOracle, MatrixPowerOracle, OracleKind,
        ReachabilityAccumulator, TraversalOracle,
    },
    report::{ConnectivityBound, ConnectivityReport, LevelOutcome},
    source::{GraphSource, NamedGraph},
    subsets::{Combinations, VertexSubset, binomial, enumerate_subsets},
    verifier::Verifier,
};
