//! Support library for the kconnect CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and tests can
//! exercise them without spawning a subprocess.

pub mod cli;
pub mod logging;
