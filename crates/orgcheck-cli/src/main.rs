//! `orgcheck` binary entry point.
//!
//! Parses arguments, reads input (file or stdin), dispatches to the
//! subcommand implementation, and maps [`error::CliError`] to the process
//! exit code: 0 = sound, 1 = structural violations, 2 = input failure.
use clap::Parser as _;

mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod parse;

use cli::{Cli, Command};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = dispatch(&cli) {
        // Input failures get a leading "error:" line on stderr. Structural
        // violations already produced findings, only the code changes.
        match err {
            CliError::StructuralViolations => {}
            CliError::FileNotFound { .. }
            | CliError::PermissionDenied { .. }
            | CliError::FileTooLarge { .. }
            | CliError::InvalidUtf8 { .. }
            | CliError::StdinReadError { .. }
            | CliError::IoError { .. }
            | CliError::CsvParse { .. }
            | CliError::TooManyRecords { .. } => {
                eprintln!("{}", err.message());
            }
        }
        std::process::exit(err.exit_code());
    }
}

/// Routes the parsed CLI invocation to its subcommand implementation.
fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Check {
            file,
            depth_threshold,
            max_records,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::check::run(
                &content,
                *depth_threshold,
                *max_records,
                &cli.format,
                cli.quiet,
                cli.verbose,
                cli.no_color,
            )
        }
        Command::Inspect { file, max_records } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, *max_records, &cli.format)
        }
        Command::Version => {
            println!("{}", orgcheck_core::version());
            Ok(())
        }
    }
}
