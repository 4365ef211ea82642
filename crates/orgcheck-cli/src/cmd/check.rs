//! Implementation of `orgcheck check <file>`.
//!
//! Parses a CSV employee roster and runs the full analysis: structural
//! checks, compensation-band checks, and reporting-depth checks. Findings
//! go to stdout (they are the product of the command); the human-mode
//! summary line goes to stderr so piped output stays clean.
//!
//! Flags:
//! - `--depth-threshold <n>` (default 4): managers-above-employee limit.
//! - `--max-records <n>` (default 1000): input record cap.
//!
//! Exit codes:
//! - 0 = structurally sound (warnings and info findings may still exist)
//! - 1 = structural violations (at least one error-severity finding)
//! - 2 = input failure (unreadable file, malformed CSV, record cap)
use std::time::Instant;

use orgcheck_core::{AnalysisConfig, OrgIndex, analyze};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, Renderer};
use crate::parse::parse_employees;

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `check` command.
///
/// Parses `content` as an employee CSV, builds the reporting index, runs
/// every analysis phase, and emits findings to stdout. In human mode the
/// summary line goes to stderr; in JSON mode the summary is the final
/// NDJSON object on stdout so the stream is self-contained.
///
/// Returns `Ok(())` when the hierarchy is structurally sound. Returns
/// [`CliError::StructuralViolations`] (exit code 1) when error-severity
/// findings exist, or an input-failure variant (exit code 2) when the
/// content cannot be parsed.
///
/// # Errors
///
/// - [`CliError::CsvParse`] — content is not a valid employee CSV.
/// - [`CliError::TooManyRecords`] — more than `max_records` records.
/// - [`CliError::StructuralViolations`] — the hierarchy has errors.
/// - [`CliError::IoError`] — writing output failed.
pub fn run(
    content: &str,
    depth_threshold: u32,
    max_records: usize,
    format: &OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let started = Instant::now();

    // --- Parse ---
    let employees = parse_employees(content, max_records)?;

    // --- Index and analyze ---
    let org = OrgIndex::build(employees);
    let config = AnalysisConfig {
        depth_threshold,
        ..AnalysisConfig::default()
    };
    let result = analyze(&org, &config);

    // --- Emit findings to stdout ---
    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let renderer = Renderer::from_flags(mode, no_color, quiet, verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for diag in &result.diagnostics {
        renderer.finding(&mut out, diag).map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })?;
    }

    // --- Summary line ---
    // Human summary goes to stderr so piped findings stay clean; the JSON
    // summary is the final object of the NDJSON stream on stdout.
    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();

    match mode {
        FormatMode::Human => {
            renderer.summary(&mut err_out, &result).map_err(|e| CliError::IoError {
                source: "stderr".to_owned(),
                detail: e.to_string(),
            })?;
        }
        FormatMode::Json => {
            renderer.summary(&mut out, &result).map_err(|e| CliError::IoError {
                source: "stdout".to_owned(),
                detail: e.to_string(),
            })?;
        }
    }

    renderer
        .timing(
            &mut err_out,
            &format!("analyzed {} employees", org.len()),
            started.elapsed(),
        )
        .map_err(|e| CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        })?;

    // --- Exit code ---
    if result.has_errors() {
        Err(CliError::StructuralViolations)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
