//! Benchmark support crate for kconnect.
//!
//! Provides seeded graph generators and parameter types used by the Criterion
//! benchmarks for the connectivity oracles and the level verifier.

pub mod error;
pub mod params;
pub mod source;
