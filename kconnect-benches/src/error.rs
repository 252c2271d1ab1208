//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of calling
//! `.expect()` inside Criterion closures.

use crate::source::SyntheticError;
use kconnect_core::{GraphError, VerifierError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A fixture graph could not be built.
    #[error("fixture construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Verifier configuration or a verification run failed.
    #[error("verifier failed: {0}")]
    Verifier(#[from] VerifierError),
}
