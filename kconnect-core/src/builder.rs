//! Builder utilities for configuring [`Verifier`] instances.
//!
//! Exposes the execution strategy selection surface and the validation
//! applied before a verifier is constructed.

use std::num::NonZeroUsize;

use crate::{Result, error::VerifierError, oracle::OracleKind, verifier::Verifier};

/// Upper bound used when none is configured.
pub const DEFAULT_UPPER_BOUND: usize = 3;

/// Indicates how [`Verifier`] evaluates the subsets of one level.
///
/// # Examples
/// ```
/// use kconnect_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert!(matches!(strategy, ExecutionStrategy::Sequential));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Check subsets one at a time on the calling thread.
    #[default]
    Sequential,
    /// Check subsets concurrently on the rayon thread pool.
    ///
    /// Requires the `parallel` feature.
    Parallel,
}

/// Configures and constructs [`Verifier`] instances.
///
/// # Examples
/// ```
/// use kconnect_core::{ExecutionStrategy, OracleKind, VerifierBuilder};
///
/// let verifier = VerifierBuilder::new()
///     .with_upper_bound(2)
///     .with_oracle(OracleKind::MatrixPower)
///     .with_short_circuit(false)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(verifier.upper_bound().get(), 2);
/// assert_eq!(verifier.oracle(), OracleKind::MatrixPower);
/// assert_eq!(verifier.execution_strategy(), ExecutionStrategy::Sequential);
/// assert!(!verifier.short_circuit());
/// ```
#[derive(Debug, Clone)]
pub struct VerifierBuilder {
    upper_bound: usize,
    oracle: OracleKind,
    execution_strategy: ExecutionStrategy,
    short_circuit: bool,
}

impl Default for VerifierBuilder {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
            oracle: OracleKind::default(),
            execution_strategy: ExecutionStrategy::default(),
            short_circuit: true,
        }
    }
}

impl VerifierBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::{OracleKind, VerifierBuilder};
    ///
    /// let builder = VerifierBuilder::new();
    /// assert_eq!(builder.upper_bound(), 3);
    /// assert_eq!(builder.oracle(), OracleKind::Traversal);
    /// assert!(builder.short_circuit());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the largest removal size K to check.
    #[must_use]
    pub fn with_upper_bound(mut self, upper_bound: usize) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// Returns the configured upper bound.
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Selects the connectivity oracle.
    #[must_use]
    pub fn with_oracle(mut self, oracle: OracleKind) -> Self {
        self.oracle = oracle;
        self
    }

    /// Returns the configured oracle.
    #[must_use]
    pub fn oracle(&self) -> OracleKind {
        self.oracle
    }

    /// Sets the execution strategy used for each level.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Controls whether a level stops at its first disconnecting subset.
    ///
    /// Disabling short-circuiting examines every subset, which makes the
    /// per-level cut counts exact.
    #[must_use]
    pub fn with_short_circuit(mut self, short_circuit: bool) -> Self {
        self.short_circuit = short_circuit;
        self
    }

    /// Returns whether levels stop at their first disconnecting subset.
    #[must_use]
    pub fn short_circuit(&self) -> bool {
        self.short_circuit
    }

    /// Validates the configuration and constructs a [`Verifier`].
    ///
    /// # Errors
    /// Returns [`VerifierError::InvalidUpperBound`] when the upper bound is
    /// zero and [`VerifierError::BackendUnavailable`] when the parallel
    /// strategy is requested without the `parallel` feature.
    ///
    /// # Examples
    /// ```
    /// use kconnect_core::{VerifierBuilder, VerifierError};
    ///
    /// let err = VerifierBuilder::new().with_upper_bound(0).build().expect_err("K = 0");
    /// assert!(matches!(err, VerifierError::InvalidUpperBound { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Verifier> {
        let upper_bound =
            NonZeroUsize::new(self.upper_bound).ok_or(VerifierError::InvalidUpperBound {
                got: self.upper_bound,
            })?;

        if cfg!(not(feature = "parallel"))
            && self.execution_strategy == ExecutionStrategy::Parallel
        {
            return Err(VerifierError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            });
        }

        Ok(Verifier::new(
            upper_bound,
            self.oracle,
            self.execution_strategy,
            self.short_circuit,
        ))
    }
}
