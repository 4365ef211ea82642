/// Compensation-band checks (PAY-01 through PAY-03).
///
/// A manager's salary should sit inside [1.2x, 1.5x] of the arithmetic mean
/// of their direct reports' salaries. Every compensation check skips a
/// report group whose manager id does not resolve in the id index, and
/// skips the root — the root has nobody to be banded against.
///
/// Comparisons use unrounded values; rounding to the nearest integer is for
/// message display only. A zero average makes both thresholds zero, so any
/// positive manager salary is overpaid — that falls out of the formula and
/// is not special-cased.
use crate::analysis::{AnalysisConfig, AnalysisRule, Phase};
use crate::diagnostics::{CheckId, Diagnostic, Location, Severity};
use crate::employee::Employee;
use crate::index::OrgIndex;

/// Lower band factor: a manager should earn at least this multiple of the
/// average direct-report salary.
pub const MIN_BAND_FACTOR: f64 = 1.2;

/// Upper band factor: a manager should earn at most this multiple of the
/// average direct-report salary.
pub const MAX_BAND_FACTOR: f64 = 1.5;

// ---------------------------------------------------------------------------
// Band statistics
// ---------------------------------------------------------------------------

/// Per-group salary statistics for one manager's direct reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandStats {
    /// Arithmetic mean of the direct reports' salaries.
    pub average: f64,
    /// `average * 1.2` — the floor of the acceptable band.
    pub min_should_earn: f64,
    /// `average * 1.5` — the ceiling of the acceptable band.
    pub max_should_earn: f64,
}

/// Computes band statistics for a non-empty report group.
///
/// Returns `None` for an empty group; the no-subordinates check owns that
/// case and band analysis is skipped for it.
pub fn band_stats(reports: &[Employee]) -> Option<BandStats> {
    if reports.is_empty() {
        return None;
    }
    let sum: f64 = reports.iter().map(|r| r.salary).sum();
    let average = sum / reports.len() as f64;
    Some(BandStats {
        average,
        min_should_earn: average * MIN_BAND_FACTOR,
        max_should_earn: average * MAX_BAND_FACTOR,
    })
}

/// Resolves a report-group key to a manager that compensation checks apply
/// to: known in the id index and not the root.
fn reviewable_manager(org: &OrgIndex, manager_id: u32) -> Option<&Employee> {
    let manager = org.employee(manager_id)?;
    if org.is_root(manager) {
        return None;
    }
    Some(manager)
}

/// Rounds to the nearest integer for message display.
fn rounded(value: f64) -> i64 {
    value.round() as i64
}

// ---------------------------------------------------------------------------
// PAY-01: underpaid managers
// ---------------------------------------------------------------------------

/// A reviewable manager earning strictly less than 1.2x the average salary
/// of their direct reports.
pub struct Underpaid;

impl AnalysisRule for Underpaid {
    fn id(&self) -> CheckId {
        CheckId::Underpaid
    }

    fn phase(&self) -> Phase {
        Phase::Compensation
    }

    fn check(&self, org: &OrgIndex, _config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        for (manager_id, reports) in org.report_groups() {
            let Some(manager) = reviewable_manager(org, manager_id) else {
                continue;
            };
            let Some(stats) = band_stats(reports) else {
                continue;
            };
            if manager.salary < stats.min_should_earn {
                let shortfall = stats.min_should_earn - manager.salary;
                diags.push(Diagnostic::new(
                    self.id(),
                    self.severity(),
                    Location::Manager { id: manager_id },
                    format!(
                        "{} is UNDERPAID by {} (earns {}, should earn at least {}); \
                         average subordinate salary: {}",
                        manager.full_name(),
                        rounded(shortfall),
                        rounded(manager.salary),
                        rounded(stats.min_should_earn),
                        rounded(stats.average),
                    ),
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PAY-02: overpaid managers
// ---------------------------------------------------------------------------

/// A reviewable manager earning strictly more than 1.5x the average salary
/// of their direct reports.
pub struct Overpaid;

impl AnalysisRule for Overpaid {
    fn id(&self) -> CheckId {
        CheckId::Overpaid
    }

    fn phase(&self) -> Phase {
        Phase::Compensation
    }

    fn check(&self, org: &OrgIndex, _config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        for (manager_id, reports) in org.report_groups() {
            let Some(manager) = reviewable_manager(org, manager_id) else {
                continue;
            };
            let Some(stats) = band_stats(reports) else {
                continue;
            };
            if manager.salary > stats.max_should_earn {
                let excess = manager.salary - stats.max_should_earn;
                diags.push(Diagnostic::new(
                    self.id(),
                    self.severity(),
                    Location::Manager { id: manager_id },
                    format!(
                        "{} is OVERPAID by {} (earns {}, should earn no more than {}); \
                         average subordinate salary: {}",
                        manager.full_name(),
                        rounded(excess),
                        rounded(manager.salary),
                        rounded(stats.max_should_earn),
                        rounded(stats.average),
                    ),
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PAY-03: managers without subordinates
// ---------------------------------------------------------------------------

/// A reviewable manager whose report group is empty. Band analysis is
/// skipped for such a group; this note is the only finding it produces.
pub struct NoSubordinates;

impl AnalysisRule for NoSubordinates {
    fn id(&self) -> CheckId {
        CheckId::NoSubordinates
    }

    fn phase(&self) -> Phase {
        Phase::Compensation
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, org: &OrgIndex, _config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        for (manager_id, reports) in org.report_groups() {
            let Some(manager) = reviewable_manager(org, manager_id) else {
                continue;
            };
            if reports.is_empty() {
                diags.push(Diagnostic::new(
                    self.id(),
                    self.severity(),
                    Location::Manager { id: manager_id },
                    format!("{} has no subordinates", manager.full_name()),
                ));
            }
        }
    }
}
