//! CLI entry point for the kconnect brute-force connectivity verifier.
//!
//! Parses command-line arguments with clap, runs the requested verification,
//! renders the per-level verdicts to stdout, and maps errors to a failing
//! exit code. Logging is initialised first so every later step can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use kconnect_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, run the command, render the report, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

/// Stable error codes carried by `err`, outermost first.
fn error_codes(err: &anyhow::Error) -> (Option<&'static str>, Option<&'static str>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => {
            let nested = core
                .induce_code()
                .map(|code| code.as_str())
                .or_else(|| core.subset_code().map(|code| code.as_str()));
            (Some(core.code().as_str()), nested)
        }
        Some(CliError::Graph(graph)) => (Some(graph.code().as_str()), None),
        _ => (None, None),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, nested_code) = error_codes(&err);
        error!(
            error = %format!("{err:#}"),
            code = code.map(field::display),
            nested_code = nested_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
