//! Implementation of `orgcheck inspect <file>`.
//!
//! Parses a CSV employee roster and prints summary statistics to stdout:
//! - headcount (distinct ids) and raw record count
//! - the root employee, or the number of root candidates when there is
//!   no unique root
//! - number of report groups (managers with at least one direct report)
//! - maximum reporting depth across the population
//! - total and mean salary
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = parse failure.
use orgcheck_core::{OrgIndex, depth_to_root};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::parse::parse_employees;

/// Statistics gathered from a parsed employee roster.
pub struct InspectStats {
    /// Number of distinct employee ids.
    pub headcount: usize,
    /// Number of raw input records (duplicates included).
    pub record_count: usize,
    /// Number of employees with no manager reference.
    pub root_count: usize,
    /// The unique root, when exactly one exists: `(id, full name)`.
    pub root: Option<(u32, String)>,
    /// Number of report groups (manager ids with at least one report).
    pub report_group_count: usize,
    /// Largest manager-hop count from any employee to the top.
    pub max_depth: u32,
    /// Sum of salaries over the known (deduplicated) population.
    pub salary_total: f64,
    /// Mean salary over the known population, 0 for an empty roster.
    pub salary_mean: f64,
}

impl InspectStats {
    /// Computes statistics from a built [`OrgIndex`].
    pub fn from_org(org: &OrgIndex) -> Self {
        let root = if org.root_count() == 1 {
            org.known_employees()
                .find(|e| org.is_root(e))
                .map(|e| (e.id, e.full_name()))
        } else {
            None
        };

        let max_depth = org
            .employees()
            .iter()
            .map(|e| depth_to_root(e, org))
            .max()
            .unwrap_or(0);

        let salary_total: f64 = org.known_employees().map(|e| e.salary).sum();
        let salary_mean = if org.is_empty() {
            0.0
        } else {
            salary_total / org.len() as f64
        };

        Self {
            headcount: org.len(),
            record_count: org.employees().len(),
            root_count: org.root_count(),
            root,
            report_group_count: org.report_groups().count(),
            max_depth,
            salary_total,
            salary_mean,
        }
    }
}

/// Runs the `inspect` command.
///
/// Parses `content` as an employee CSV, computes statistics, and writes
/// them to stdout in the requested format.
///
/// # Errors
///
/// - [`CliError::CsvParse`] — content is not a valid employee CSV.
/// - [`CliError::TooManyRecords`] — more than `max_records` records.
/// - [`CliError::IoError`] — writing output failed.
pub fn run(content: &str, max_records: usize, format: &OutputFormat) -> Result<(), CliError> {
    let employees = parse_employees(content, max_records)?;
    let org = OrgIndex::build(employees);
    let stats = InspectStats::from_org(&org);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "headcount:      {}", stats.headcount)?;
    if stats.record_count != stats.headcount {
        writeln!(w, "records:        {}", stats.record_count)?;
    }
    match &stats.root {
        Some((id, name)) => writeln!(w, "root:           {name} ({id})")?,
        None if stats.root_count == 0 => writeln!(w, "root:           none")?,
        None => writeln!(w, "root:           {} candidates", stats.root_count)?,
    }
    writeln!(w, "report groups:  {}", stats.report_group_count)?;
    writeln!(w, "max depth:      {}", stats.max_depth)?;
    writeln!(w, "salary total:   {}", stats.salary_total)?;
    writeln!(w, "salary mean:    {:.2}", stats.salary_mean)?;
    Ok(())
}

/// Writes inspect statistics as a single JSON object to stdout.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();

    obj.insert(
        "headcount".to_owned(),
        serde_json::Value::Number(stats.headcount.into()),
    );
    obj.insert(
        "record_count".to_owned(),
        serde_json::Value::Number(stats.record_count.into()),
    );
    obj.insert(
        "root_count".to_owned(),
        serde_json::Value::Number(stats.root_count.into()),
    );

    match &stats.root {
        Some((id, name)) => {
            let mut root_obj = serde_json::Map::new();
            root_obj.insert("id".to_owned(), serde_json::Value::Number((*id).into()));
            root_obj.insert("name".to_owned(), serde_json::Value::String(name.clone()));
            obj.insert("root".to_owned(), serde_json::Value::Object(root_obj));
        }
        None => {
            obj.insert("root".to_owned(), serde_json::Value::Null);
        }
    }

    obj.insert(
        "report_group_count".to_owned(),
        serde_json::Value::Number(stats.report_group_count.into()),
    );
    obj.insert(
        "max_depth".to_owned(),
        serde_json::Value::Number(stats.max_depth.into()),
    );
    obj.insert(
        "salary_total".to_owned(),
        serde_json::Number::from_f64(stats.salary_total)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
    );
    obj.insert(
        "salary_mean".to_owned(),
        serde_json::Number::from_f64(stats.salary_mean)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
