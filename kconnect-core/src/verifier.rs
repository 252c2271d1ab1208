//! Brute-force vertex connectivity verification.
//!
//! Provides the [`Verifier`] runtime entry point. For each removal size
//! `k = 1..=K` it deletes every `k`-subset of vertices, derives the induced
//! subgraph and asks the configured oracle whether what remains is connected.

use std::{num::NonZeroUsize, sync::Arc};

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    Result,
    builder::ExecutionStrategy,
    error::{InduceError, VerifierError},
    graph::{Graph, Vertex},
    induce::induce,
    oracle::{ConnectivityOracle, OracleKind},
    report::{ConnectivityReport, LevelOutcome},
    source::GraphSource,
    subsets::{Combinations, binomial},
};

type LevelResult<T> = core::result::Result<T, InduceError>;

/// Entry point for verifying vertex connectivity up to a bound.
///
/// # Examples
/// ```
/// use kconnect_core::{ConnectivityBound, VerifierBuilder, fixtures};
///
/// let path = fixtures::path(3).expect("path is valid");
/// let verifier = VerifierBuilder::new()
///     .with_upper_bound(2)
///     .build()
///     .expect("builder must succeed");
/// let report = verifier.run(&path).expect("run must succeed");
/// assert_eq!(report.level(1).and_then(|level| level.witness()), Some(&[1][..]));
/// assert_eq!(report.bound(), ConnectivityBound::Exact(1));
/// ```
#[derive(Debug, Clone)]
pub struct Verifier {
    upper_bound: NonZeroUsize,
    oracle: OracleKind,
    execution_strategy: ExecutionStrategy,
    short_circuit: bool,
}

impl Verifier {
    pub(crate) fn new(
        upper_bound: NonZeroUsize,
        oracle: OracleKind,
        execution_strategy: ExecutionStrategy,
        short_circuit: bool,
    ) -> Self {
        Self {
            upper_bound,
            oracle,
            execution_strategy,
            short_circuit,
        }
    }

    /// Returns the largest removal size K checked by [`Self::run`].
    #[must_use]
    pub fn upper_bound(&self) -> NonZeroUsize {
        self.upper_bound
    }

    /// Returns the oracle used to judge each induced subgraph.
    #[must_use]
    pub fn oracle(&self) -> OracleKind {
        self.oracle
    }

    /// Returns the execution strategy used for each level.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns whether levels stop at their first disconnecting subset.
    #[must_use]
    pub fn short_circuit(&self) -> bool {
        self.short_circuit
    }

    /// Checks every removal size from 1 to K against the graph in `source`.
    ///
    /// # Errors
    /// Returns [`VerifierError::UpperBoundExceedsVertexCount`] when K exceeds
    /// the number of vertices, and [`VerifierError::Induce`] if an induced
    /// subgraph cannot be derived.
    pub fn run<S: GraphSource + ?Sized>(&self, source: &S) -> Result<ConnectivityReport> {
        self.run_graph(source.name(), source.graph())
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, data_source, graph),
        fields(
            data_source = %data_source,
            vertices = graph.vertex_count(),
            upper_bound = %self.upper_bound,
            oracle = self.oracle.as_str(),
            strategy = ?self.execution_strategy
        ),
    )]
    fn run_graph(&self, data_source: &str, graph: &Graph) -> Result<ConnectivityReport> {
        let vertex_count = graph.vertex_count();
        let upper_bound = self.upper_bound.get();
        if upper_bound > vertex_count {
            return Err(VerifierError::UpperBoundExceedsVertexCount {
                data_source: Arc::from(data_source),
                upper_bound,
                vertex_count,
            });
        }

        let base_connected = self.oracle.is_connected(graph);
        if !base_connected {
            warn!(data_source, "graph is disconnected before any removal");
        }

        let levels = (1..=upper_bound)
            .map(|level| self.evaluate_level(data_source, graph, level))
            .collect::<Result<Vec<_>>>()?;

        let report = ConnectivityReport::new(
            data_source.to_owned(),
            vertex_count,
            graph.min_degree(),
            base_connected,
            levels,
        );
        info!(
            data_source,
            bound = %report.bound(),
            "vertex connectivity verification complete"
        );
        Ok(report)
    }

    /// Checks a single removal size against the graph in `source`.
    ///
    /// `level` is not limited by the configured upper bound. A level of zero
    /// checks the unmodified graph.
    ///
    /// # Errors
    /// Returns [`VerifierError::Subset`] when `level` exceeds the number of
    /// vertices and [`VerifierError::Induce`] if an induced subgraph cannot be
    /// derived.
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::{VerifierBuilder, fixtures};
    ///
    /// let cycle = fixtures::cycle(4).expect("4-cycle");
    /// let verifier = VerifierBuilder::new()
    ///     .with_short_circuit(false)
    ///     .build()
    ///     .expect("valid");
    /// let outcome = verifier.verify_level(&cycle, 2).expect("2 <= 4");
    /// assert_eq!(outcome.subsets_examined(), 6);
    /// assert_eq!(outcome.cuts_found(), 2);
    /// ```
    pub fn verify_level<S: GraphSource + ?Sized>(
        &self,
        source: &S,
        level: usize,
    ) -> Result<LevelOutcome> {
        self.evaluate_level(source.name(), source.graph(), level)
    }

    #[instrument(
        name = "core.verify_level",
        err,
        skip(self, data_source, graph),
        fields(
            connected = field::Empty,
            subsets_examined = field::Empty
        ),
    )]
    fn evaluate_level(
        &self,
        data_source: &str,
        graph: &Graph,
        level: usize,
    ) -> Result<LevelOutcome> {
        let vertices: Vec<Vertex> = graph.vertices().collect();
        let subsets =
            Combinations::new(&vertices, level).map_err(|error| VerifierError::Subset {
                data_source: Arc::from(data_source),
                error,
            })?;
        debug!(
            level,
            total = ?binomial(vertices.len(), level),
            "enumerating removal subsets"
        );

        let outcome = match self.execution_strategy {
            ExecutionStrategy::Sequential => self.scan_sequential(graph, level, subsets),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => self.scan_parallel(graph, level, subsets),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => {
                return Err(VerifierError::BackendUnavailable {
                    requested: ExecutionStrategy::Parallel,
                });
            }
        }
        .map_err(|error| VerifierError::Induce {
            data_source: Arc::from(data_source),
            error,
        })?;

        let span = Span::current();
        span.record("connected", outcome.connected());
        span.record("subsets_examined", outcome.subsets_examined());
        if let Some(witness) = outcome.witness() {
            debug!(level, ?witness, "removal disconnects the graph");
        }
        Ok(outcome)
    }

    fn scan_sequential(
        &self,
        graph: &Graph,
        level: usize,
        subsets: Combinations<'_>,
    ) -> LevelResult<LevelOutcome> {
        let mut examined = 0;
        let mut cuts = 0;
        let mut witness = None;
        for removed in subsets {
            examined += 1;
            if self.subset_keeps_connected(graph, &removed)? {
                continue;
            }
            cuts += 1;
            if witness.is_none() {
                witness = Some(removed);
            }
            if self.short_circuit {
                break;
            }
        }
        Ok(LevelOutcome::new(level, examined, cuts, witness))
    }

    #[cfg(feature = "parallel")]
    fn scan_parallel(
        &self,
        graph: &Graph,
        level: usize,
        subsets: Combinations<'_>,
    ) -> LevelResult<LevelOutcome> {
        let candidates: Vec<_> = subsets.collect();
        let examined = AtomicUsize::new(0);
        let check = |removed: &[Vertex]| {
            examined.fetch_add(1, Ordering::Relaxed);
            self.subset_keeps_connected(graph, removed)
                .map(|connected| !connected)
        };

        let (cuts, witness) = if self.short_circuit {
            let witness = candidates
                .into_par_iter()
                .map(|removed| check(&removed).map(|cut| cut.then_some(removed)))
                .find_map_first(LevelResult::transpose)
                .transpose()?;
            (usize::from(witness.is_some()), witness)
        } else {
            let cuts = candidates
                .into_par_iter()
                .map(|removed| check(&removed).map(|cut| cut.then_some(removed)))
                .filter_map(LevelResult::transpose)
                .collect::<LevelResult<Vec<_>>>()?;
            (cuts.len(), cuts.into_iter().next())
        };

        Ok(LevelOutcome::new(
            level,
            examined.into_inner(),
            cuts,
            witness,
        ))
    }

    fn subset_keeps_connected(&self, graph: &Graph, removed: &[Vertex]) -> LevelResult<bool> {
        let induced = induce(graph, removed)?;
        Ok(self.oracle.is_connected(induced.graph()))
    }
}
