//! Command-line interface orchestration for kconnect.
//!
//! The `verify` command loads a built-in fixture or an adjacency-list file,
//! runs the brute-force verifier and renders the per-level verdicts.

mod commands;

pub use commands::{
    Cli, CliError, Command, FileArgs, FixtureArgs, GraphSourceArg, OracleArg, VerifyCommand,
    render_report, run_cli,
};
