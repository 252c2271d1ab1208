//! Command implementations and argument parsing for the kconnect CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kconnect_core::{
    ConnectivityReport, DEFAULT_UPPER_BOUND, ExecutionStrategy, GraphError, NamedGraph,
    OracleKind, Verifier, VerifierBuilder, VerifierError, fixtures,
};
use kconnect_providers_text::{TextGraphError, TextGraphProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kconnect",
    about = "Verify the vertex connectivity of small graphs by brute force."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Remove every vertex subset of size 1..=K and report which sizes
    /// disconnect the graph.
    Verify(VerifyCommand),
}

/// Options accepted by the `verify` command.
#[derive(Debug, Args, Clone)]
pub struct VerifyCommand {
    /// Largest removal size K to check.
    #[arg(
        long = "up-to",
        default_value_t = DEFAULT_UPPER_BOUND,
        value_parser = clap::value_parser!(usize),
    )]
    pub up_to: usize,

    /// Connectivity test applied to each induced subgraph.
    #[arg(long, value_enum, default_value_t = OracleArg::Traversal)]
    pub oracle: OracleArg,

    /// Check the subsets of each level on all available cores.
    #[arg(long)]
    pub parallel: bool,

    /// Examine every subset instead of stopping at the first cut.
    #[arg(long)]
    pub exhaustive: bool,

    /// Graph to analyse.
    #[command(subcommand)]
    pub source: GraphSourceArg,
}

/// Graph inputs accepted by `verify`.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSourceArg {
    /// A built-in graph: `triangle`, `reference`, `path<n>`, `cycle<n>` or
    /// `complete<n>`.
    Fixture(FixtureArgs),
    /// An adjacency-list text file, one line of neighbours per vertex.
    File(FileArgs),
}

/// Built-in graph selection.
#[derive(Debug, Args, Clone)]
pub struct FixtureArgs {
    /// Fixture name, for example `reference` or `cycle4`.
    pub name: String,
}

/// Adjacency-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the adjacency-list file.
    pub path: PathBuf,

    /// Override name for the graph (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Connectivity oracles selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OracleArg {
    /// Breadth-first traversal from vertex 0.
    Traversal,
    /// Sum of adjacency matrix powers.
    MatrixPower,
}

impl From<OracleArg> for OracleKind {
    fn from(value: OracleArg) -> Self {
        match value {
            OracleArg::Traversal => Self::Traversal,
            OracleArg::MatrixPower => Self::MatrixPower,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening an input file failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parsing an adjacency-list file failed.
    #[error(transparent)]
    Text(#[from] TextGraphError),
    /// Configuring or running the verifier failed.
    #[error(transparent)]
    Core(#[from] VerifierError),
    /// A parameterised fixture produced an invalid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// No fixture matches the requested name.
    #[error("unknown fixture `{name}`; expected triangle, reference, path<n>, cycle<n> or complete<n>")]
    UnknownFixture {
        /// The name supplied on the command line.
        name: String,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or verification fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kconnect_cli::cli::{Cli, Command, FileArgs, GraphSourceArg, OracleArg, VerifyCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1\n0 2\n1\n")?;
/// let cli = Cli {
///     command: Command::Verify(VerifyCommand {
///         up_to: 2,
///         oracle: OracleArg::Traversal,
///         parallel: false,
///         exhaustive: false,
///         source: GraphSourceArg::File(FileArgs {
///             path: file.path().to_path_buf(),
///             name: Some("path".into()),
///         }),
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.data_source(), "path");
/// assert_eq!(report.first_failing_level().map(|level| level.level()), Some(1));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ConnectivityReport, CliError> {
    match cli.command {
        Command::Verify(verify) => {
            Span::current().record("command", field::display("verify"));
            run_verify(verify)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        up_to = command.up_to,
        oracle = field::Empty,
        strategy = field::Empty,
        source = field::Empty
    ),
)]
pub(super) fn run_verify(command: VerifyCommand) -> Result<ConnectivityReport, CliError> {
    let VerifyCommand {
        up_to,
        oracle,
        parallel,
        exhaustive,
        source,
    } = command;
    let strategy = if parallel {
        ExecutionStrategy::Parallel
    } else {
        ExecutionStrategy::Sequential
    };
    let oracle = OracleKind::from(oracle);
    let verifier = VerifierBuilder::new()
        .with_upper_bound(up_to)
        .with_oracle(oracle)
        .with_execution_strategy(strategy)
        .with_short_circuit(!exhaustive)
        .build()?;

    let span = Span::current();
    span.record("oracle", field::display(oracle.as_str()));
    span.record("strategy", field::debug(strategy));

    let report = match source {
        GraphSourceArg::Fixture(args) => {
            span.record("source", field::display("fixture"));
            verify_fixture(&verifier, &args.name)?
        }
        GraphSourceArg::File(args) => {
            span.record("source", field::display("file"));
            verify_file(&verifier, args)?
        }
    };

    info!(
        data_source = report.data_source(),
        bound = %report.bound(),
        "command completed"
    );
    Ok(report)
}

fn verify_fixture(verifier: &Verifier, name: &str) -> Result<ConnectivityReport, CliError> {
    let fixture = resolve_fixture(name)?;
    Ok(verifier.run(&fixture)?)
}

fn verify_file(verifier: &Verifier, args: FileArgs) -> Result<ConnectivityReport, CliError> {
    let provider = load_file(&args.path, args.name.as_deref())?;
    Ok(verifier.run(&provider)?)
}

/// Maps a fixture name onto its graph.
///
/// Parameterised families take their vertex count as a decimal suffix, so
/// `cycle4` is the 4-cycle and `complete6` is `K₆`.
pub(super) fn resolve_fixture(name: &str) -> Result<NamedGraph, CliError> {
    let unknown = || CliError::UnknownFixture {
        name: name.to_owned(),
    };
    let fixture = match name {
        "triangle" => fixtures::triangle()?,
        "reference" => fixtures::reference()?,
        _ => {
            let split = name
                .find(|c: char| c.is_ascii_digit())
                .ok_or_else(unknown)?;
            let (family, size) = name.split_at(split);
            let size: usize = size.parse().map_err(|_| unknown())?;
            match family {
                "path" => fixtures::path(size)?,
                "cycle" => fixtures::cycle(size)?,
                "complete" => fixtures::complete(size)?,
                _ => return Err(unknown()),
            }
        }
    };
    Ok(fixture)
}

#[instrument(
    name = "cli.load_file",
    err,
    skip(path, override_name),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn load_file(
    path: &Path,
    override_name: Option<&str>,
) -> Result<TextGraphProvider, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(override_name.unwrap_or("<derived>")),
    );
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = derive_graph_name(path, override_name);
    Ok(TextGraphProvider::try_from_reader(
        name,
        BufReader::new(file),
    )?)
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `report` to `writer`.
///
/// One `graph is k-connected: <bool>` line per level is followed by a witness
/// line for each failing level and the connectivity conclusion.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kconnect_cli::cli::render_report;
/// # use kconnect_core::{VerifierBuilder, fixtures};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cycle = fixtures::cycle(4)?;
/// let report = VerifierBuilder::new().with_upper_bound(2).build()?.run(&cycle)?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "graph is 1-connected: true\n\
///      graph is 2-connected: false\n\
///      witness for 2: [0, 2]\n\
///      vertex connectivity: = 2\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &ConnectivityReport, mut writer: impl Write) -> io::Result<()> {
    for level in report.levels() {
        writeln!(
            writer,
            "graph is {}-connected: {}",
            level.level(),
            level.connected()
        )?;
    }
    for level in report.levels() {
        if let Some(witness) = level.witness() {
            writeln!(writer, "witness for {}: {witness:?}", level.level())?;
        }
    }
    writeln!(writer, "vertex connectivity: {}", report.bound())?;
    Ok(())
}
