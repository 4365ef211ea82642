/// CSV parsing: raw input text → typed employee records.
///
/// The input format is a header row `id,firstName,lastName,salary,managerId`
/// followed by one record per employee; an empty `managerId` field marks a
/// candidate root. Two deliberate policies:
///
/// - Records with fewer than five fields are skipped silently, not
///   rejected — truncated trailing lines are common in hand-edited exports.
/// - Fields past the fifth are ignored, on the header row and on records
///   alike; only the five named columns carry data.
/// - The record count is capped: as soon as more than `max_records` records
///   have been parsed, reading stops and the whole input is rejected with a
///   descriptive message, before any analysis runs.
use orgcheck_core::Employee;

use crate::error::CliError;

/// Minimum number of fields a record needs to describe an employee.
const MIN_FIELDS: usize = 5;

/// Parses CSV `content` into employee records.
///
/// # Errors
///
/// - [`CliError::CsvParse`] — a record (with enough fields) carries a value
///   that does not parse, e.g. a non-numeric salary. The message includes
///   the 1-based input line.
/// - [`CliError::TooManyRecords`] — more than `max_records` records.
pub fn parse_employees(content: &str, max_records: usize) -> Result<Vec<Employee>, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: csv::StringRecord = reader
        .headers()
        .map_err(|e| CliError::CsvParse {
            line: 1,
            detail: e.to_string(),
        })?
        .iter()
        .take(MIN_FIELDS)
        .collect();

    let mut employees: Vec<Employee> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CliError::CsvParse {
            line: csv_error_line(&e),
            detail: e.to_string(),
        })?;

        if record.len() < MIN_FIELDS {
            continue;
        }

        let employee: Employee = if record.len() > MIN_FIELDS {
            let fields: csv::StringRecord = record.iter().take(MIN_FIELDS).collect();
            fields.deserialize(Some(&headers))
        } else {
            record.deserialize(Some(&headers))
        }
        .map_err(|e| CliError::CsvParse {
            line: record.position().map_or(0, csv::Position::line),
            detail: e.to_string(),
        })?;
        employees.push(employee);

        if employees.len() > max_records {
            return Err(CliError::TooManyRecords {
                limit: max_records,
            });
        }
    }

    Ok(employees)
}

/// Extracts the 1-based input line from a `csv::Error`, when known.
fn csv_error_line(e: &csv::Error) -> u64 {
    e.position().map_or(0, csv::Position::line)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
