/// Finding output for the `check` command.
///
/// A [`Renderer`] owns the output policy for one run: the selected
/// [`FormatMode`], whether ANSI colors apply, and the quiet/verbose flags.
/// Human mode reuses the canonical [`Diagnostic`] display line and only
/// re-renders it when the severity tag needs coloring; JSON mode serialises
/// each finding through `serde_json` as one NDJSON line.
///
/// Colors are disabled when `--no-color` is set, the `NO_COLOR` environment
/// variable is present (per <https://no-color.org>), or stdout is not a TTY.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use orgcheck_core::{AnalysisResult, Diagnostic, Severity};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// One display line per finding, severity tag colored on a TTY.
    Human,
    /// One JSON object per finding (NDJSON).
    Json,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders findings, the run summary, and timing for one command invocation.
#[derive(Debug, Clone)]
pub struct Renderer {
    mode: FormatMode,
    colors: bool,
    quiet: bool,
    verbose: bool,
}

impl Renderer {
    /// Builds a renderer from the CLI flags. Color detection only applies in
    /// human mode; JSON output never carries escape codes.
    pub fn from_flags(mode: FormatMode, no_color: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            mode,
            colors: mode == FormatMode::Human && colors_enabled(no_color),
            quiet,
            verbose,
        }
    }

    /// Test/seam constructor with color detection bypassed.
    #[cfg(test)]
    fn plain(mode: FormatMode, quiet: bool, verbose: bool) -> Self {
        Self {
            mode,
            colors: false,
            quiet,
            verbose,
        }
    }

    /// Quiet mode keeps errors and drops everything else.
    fn suppresses(&self, severity: Severity) -> bool {
        self.quiet && severity != Severity::Error
    }

    /// Writes one finding in the selected format.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `writer` fails.
    pub fn finding<W: Write>(&self, writer: &mut W, diag: &Diagnostic) -> std::io::Result<()> {
        if self.suppresses(diag.severity) {
            return Ok(());
        }
        match self.mode {
            FormatMode::Human => {
                if self.colors {
                    let (tag, color) = severity_tag(diag.severity);
                    writeln!(
                        writer,
                        "{color}{tag}{ANSI_RESET} {} {}: {}",
                        diag.check_id, diag.location, diag.message,
                    )
                } else {
                    // The Display impl already carries the severity tag.
                    writeln!(writer, "{diag}")
                }
            }
            FormatMode::Json => {
                let line = serde_json::json!({
                    "check_id": diag.check_id.code(),
                    "severity": severity_label(diag.severity),
                    "location": diag.location.to_string(),
                    "message": diag.message,
                });
                writeln!(writer, "{line}")
            }
        }
    }

    /// Writes the end-of-run summary: one human count line, or a final
    /// `{"summary":...}` NDJSON object. Suppressed in quiet mode.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `writer` fails.
    pub fn summary<W: Write>(&self, writer: &mut W, result: &AnalysisResult) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let errors = result.errors().count();
        let warnings = result.warnings().count();
        let infos = result.infos().count();
        match self.mode {
            FormatMode::Human => writeln!(
                writer,
                "{errors} {}, {warnings} {}, {infos} info",
                pluralize(errors, "error", "errors"),
                pluralize(warnings, "warning", "warnings"),
            ),
            FormatMode::Json => {
                let line = serde_json::json!({
                    "summary": { "errors": errors, "warnings": warnings, "info": infos },
                });
                writeln!(writer, "{line}")
            }
        }
    }

    /// Writes a `{label} in {n}ms` timing line. No-op unless verbose.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `writer` fails.
    pub fn timing<W: Write>(
        &self,
        writer: &mut W,
        label: &str,
        elapsed: Duration,
    ) -> std::io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        writeln!(writer, "{label} in {}ms", elapsed.as_millis())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    // NO_COLOR: presence of the variable (any value) disables color.
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn severity_tag(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Error => ("[E]", ANSI_RED),
        Severity::Warning => ("[W]", ANSI_YELLOW),
        Severity::Info => ("[I]", ANSI_CYAN),
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
