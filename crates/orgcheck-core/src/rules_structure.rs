/// Structural-integrity checks (STR-01 through STR-04).
///
/// Each check is a zero-sized struct implementing
/// [`AnalysisRule`](crate::AnalysisRule) and is registered in
/// [`crate::build_registry`] when `config.run_structure` is `true`. All four
/// checks always run; none short-circuits on another's findings.
use std::collections::{BTreeSet, HashSet};

use crate::analysis::{AnalysisConfig, AnalysisRule, Phase};
use crate::diagnostics::{CheckId, Diagnostic, Location, Severity};
use crate::employee::{Employee, EmployeeId};
use crate::index::OrgIndex;

// ---------------------------------------------------------------------------
// STR-01: an employee id listed under more than one manager
// ---------------------------------------------------------------------------

/// An employee id appearing as a report in more than one manager group is a
/// duplicate-identity violation. Each offending id is reported exactly once,
/// however many groups repeat it.
pub struct MultipleManagers;

impl AnalysisRule for MultipleManagers {
    fn id(&self) -> CheckId {
        CheckId::MultipleManagers
    }

    fn phase(&self) -> Phase {
        Phase::Structure
    }

    fn check(&self, org: &OrgIndex, _config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        let mut seen: BTreeSet<EmployeeId> = BTreeSet::new();
        let mut duplicated: BTreeSet<EmployeeId> = BTreeSet::new();

        for (_, group) in org.report_groups() {
            for report in group {
                if !seen.insert(report.id) {
                    duplicated.insert(report.id);
                }
            }
        }

        for id in duplicated {
            diags.push(Diagnostic::new(
                self.id(),
                self.severity(),
                Location::Employee { id },
                "is listed under more than one manager (not supported)",
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// STR-02: circular reporting chains
// ---------------------------------------------------------------------------

/// Walks every known employee's manager chain upward with a walk-local
/// visited set. A revisited id means the *starting* employee is inside (or
/// below) a circular reporting structure; a cycle of k members is therefore
/// reported k times, once per member. A dangling reference simply ends the
/// walk.
pub struct CircularChain;

impl AnalysisRule for CircularChain {
    fn id(&self) -> CheckId {
        CheckId::CircularChain
    }

    fn phase(&self) -> Phase {
        Phase::Structure
    }

    fn check(&self, org: &OrgIndex, _config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        for employee in org.known_employees() {
            if chain_revisits(employee, org) {
                diags.push(Diagnostic::new(
                    self.id(),
                    self.severity(),
                    Location::Employee { id: employee.id },
                    format!(
                        "{} is in a circular reporting structure",
                        employee.full_name()
                    ),
                ));
            }
        }
    }
}

/// Returns `true` if walking `employee`'s manager chain upward revisits an
/// id already seen during this walk. The visited set is local to the single
/// walk; employees are checked independently.
fn chain_revisits(employee: &Employee, org: &OrgIndex) -> bool {
    let mut visited: HashSet<EmployeeId> = HashSet::new();
    let mut next = employee.manager_id;
    while let Some(manager_id) = next {
        if !visited.insert(manager_id) {
            return true;
        }
        match org.employee(manager_id) {
            Some(manager) => next = manager.manager_id,
            // Dangling reference: tolerated silently, the walk just stops.
            None => break,
        }
    }
    false
}

// ---------------------------------------------------------------------------
// STR-03: more than one root
// ---------------------------------------------------------------------------

/// Exactly one employee should have no manager reference. More than one is
/// reported as a single population-level finding, regardless of how many
/// extra roots exist.
pub struct MultipleRoots;

impl AnalysisRule for MultipleRoots {
    fn id(&self) -> CheckId {
        CheckId::MultipleRoots
    }

    fn phase(&self) -> Phase {
        Phase::Structure
    }

    fn check(&self, org: &OrgIndex, _config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        if org.root_count() > 1 {
            diags.push(Diagnostic::new(
                self.id(),
                self.severity(),
                Location::Global,
                format!(
                    "more than one root detected: {} employees have no manager",
                    org.root_count()
                ),
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// STR-04: two-person degenerate hierarchy
// ---------------------------------------------------------------------------

/// A deliberately narrow, size-two-only warning: when the known population
/// is exactly two, every member that does not qualify as the root trivially
/// manages nobody and is flagged. This is not a general leaf-management
/// rule; populations of any other size are never flagged here.
pub struct TwoPersonOrg;

impl AnalysisRule for TwoPersonOrg {
    fn id(&self) -> CheckId {
        CheckId::TwoPersonOrg
    }

    fn phase(&self) -> Phase {
        Phase::Structure
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, org: &OrgIndex, _config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        if org.len() != 2 {
            return;
        }
        for employee in org.known_employees() {
            if !org.is_root(employee) {
                diags.push(Diagnostic::new(
                    self.id(),
                    self.severity(),
                    Location::Employee { id: employee.id },
                    format!(
                        "{} has no subordinates and is not the root",
                        employee.full_name()
                    ),
                ));
            }
        }
    }
}
