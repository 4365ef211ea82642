//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits one plain (optionally colored) line per finding to stdout.
/// `Json` emits structured NDJSON findings to stdout and a JSON object for
/// `inspect`.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `orgcheck` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Analyze an employee CSV: structural integrity, salary bands, depth.
    Check {
        /// Path to an employee CSV file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Flag employees more than this many manager hops from the top.
        ///
        /// Can also be set via the `ORGCHECK_DEPTH_THRESHOLD` environment
        /// variable. The CLI flag takes precedence.
        #[arg(long, env = "ORGCHECK_DEPTH_THRESHOLD", default_value = "4")]
        depth_threshold: u32,
        /// Reject inputs with more than this many employee records.
        ///
        /// Can also be set via the `ORGCHECK_MAX_RECORDS` environment
        /// variable. The CLI flag takes precedence.
        #[arg(long, env = "ORGCHECK_MAX_RECORDS", default_value = "1000")]
        max_records: usize,
    },

    /// Print summary statistics for an employee CSV.
    Inspect {
        /// Path to an employee CSV file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Reject inputs with more than this many employee records.
        #[arg(long, env = "ORGCHECK_MAX_RECORDS", default_value = "1000")]
        max_records: usize,
    },

    /// Print the orgcheck-core library version.
    Version,
}

/// Root of the `orgcheck` CLI.
#[derive(Parser)]
#[command(name = "orgcheck", about = "Organizational reporting-hierarchy analyzer")]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all output except structural errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and record counts
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `ORGCHECK_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence. Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "ORGCHECK_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
