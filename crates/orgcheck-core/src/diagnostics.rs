/// Finding types for the analysis engine.
///
/// This module defines [`Diagnostic`], [`Severity`], [`CheckId`],
/// [`Location`], and [`AnalysisResult`] — the types that represent every
/// finding produced by the three-phase analysis engine. The engine never
/// fails fast: all findings for a given input are collected before results
/// are returned, and malformed hierarchy data is a finding, never an error.
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// The severity level of an analysis finding.
///
/// Structural-integrity breaks produce [`Severity::Error`], compensation and
/// degeneracy concerns produce [`Severity::Warning`], and observations such
/// as deep reporting chains produce [`Severity::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The reporting hierarchy is structurally invalid.
    Error,
    /// The hierarchy is sound but a policy concern was found.
    Warning,
    /// An observation worth surfacing, not a violation.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("Error"),
            Self::Warning => f.write_str("Warning"),
            Self::Info => f.write_str("Info"),
        }
    }
}

// ---------------------------------------------------------------------------
// CheckId
// ---------------------------------------------------------------------------

/// Machine-readable identifier for an analysis check.
///
/// Each variant corresponds to exactly one check the engine runs.
/// [`CheckId::code`] returns the canonical hyphenated form used in
/// serialised output (e.g. `"STR-02"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckId {
    /// STR-01: An employee id is listed as a report under more than one manager.
    MultipleManagers,
    /// STR-02: An employee's manager chain revisits an id (circular reporting).
    CircularChain,
    /// STR-03: More than one employee has no manager reference.
    MultipleRoots,
    /// STR-04: Two-person population whose non-root member manages nobody.
    TwoPersonOrg,
    /// PAY-01: A manager earns less than 1.2x the average direct-report salary.
    Underpaid,
    /// PAY-02: A manager earns more than 1.5x the average direct-report salary.
    Overpaid,
    /// PAY-03: A resolvable non-root manager has an empty report group.
    NoSubordinates,
    /// DEP-01: An employee sits more manager hops from the top than the threshold.
    DeepHierarchy,
}

impl CheckId {
    /// Returns the canonical hyphenated check code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MultipleManagers => "STR-01",
            Self::CircularChain => "STR-02",
            Self::MultipleRoots => "STR-03",
            Self::TwoPersonOrg => "STR-04",
            Self::Underpaid => "PAY-01",
            Self::Overpaid => "PAY-02",
            Self::NoSubordinates => "PAY-03",
            Self::DeepHierarchy => "DEP-01",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// The part of the hierarchy a finding points at.
///
/// Ids are the employee ids from the input records. A manager location
/// carries the id as it appeared in the manager reference, which may be
/// dangling (resolving to no known employee).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A specific employee record.
    Employee {
        /// The employee's own id.
        id: u32,
    },
    /// An employee in their capacity as a manager of a report group.
    Manager {
        /// The id the report group is keyed under.
        id: u32,
    },
    /// A population-level finding not attributable to one employee.
    Global,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee { id } => write!(f, "employee {id}"),
            Self::Manager { id } => write!(f, "manager {id}"),
            Self::Global => f.write_str("(population)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Diagnostic
// ---------------------------------------------------------------------------

/// A single finding produced by the analysis engine.
///
/// Findings are collected across all active checks and returned in an
/// [`AnalysisResult`]. One check's findings never suppress another's.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The check that produced this finding.
    pub check_id: CheckId,
    /// The severity of this finding.
    pub severity: Severity,
    /// Where in the hierarchy the problem was detected.
    pub location: Location,
    /// A human-readable explanation of the problem.
    pub message: String,
}

impl Diagnostic {
    /// Constructs a new [`Diagnostic`].
    pub fn new(
        check_id: CheckId,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_id,
            severity,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_char = match self.severity {
            Severity::Error => 'E',
            Severity::Warning => 'W',
            Severity::Info => 'I',
        };
        write!(
            f,
            "[{level_char}] {} {}: {}",
            self.check_id, self.location, self.message
        )
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// The collected output of one analysis pass over an [`crate::OrgIndex`].
///
/// Always contains all findings — every active check runs to completion.
/// Use [`has_errors`][AnalysisResult::has_errors] or
/// [`is_conformant`][AnalysisResult::is_conformant] for overall status and
/// the filtering iterators to inspect specific findings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisResult {
    /// All findings produced during the analysis pass, in phase order.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Creates an empty [`AnalysisResult`] with no findings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an [`AnalysisResult`] from a pre-built list of findings.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Returns `true` if any finding has [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are zero [`Severity::Error`] findings.
    ///
    /// A hierarchy is structurally conformant even when it carries
    /// compensation warnings or depth observations.
    pub fn is_conformant(&self) -> bool {
        !self.has_errors()
    }

    /// Returns an iterator over all findings with [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Returns an iterator over all findings with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns an iterator over all findings with [`Severity::Info`].
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
    }

    /// Returns an iterator over all findings produced by the given check.
    pub fn by_check(&self, check: CheckId) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.check_id == check)
    }

    /// Returns the total number of findings.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no findings at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;

    fn make(check: CheckId, severity: Severity) -> Diagnostic {
        Diagnostic::new(check, severity, Location::Global, "test finding")
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "Error");
        assert_eq!(Severity::Warning.to_string(), "Warning");
        assert_eq!(Severity::Info.to_string(), "Info");
    }

    #[test]
    fn check_id_codes() {
        assert_eq!(CheckId::MultipleManagers.code(), "STR-01");
        assert_eq!(CheckId::CircularChain.code(), "STR-02");
        assert_eq!(CheckId::MultipleRoots.code(), "STR-03");
        assert_eq!(CheckId::TwoPersonOrg.code(), "STR-04");
        assert_eq!(CheckId::Underpaid.code(), "PAY-01");
        assert_eq!(CheckId::Overpaid.code(), "PAY-02");
        assert_eq!(CheckId::NoSubordinates.code(), "PAY-03");
        assert_eq!(CheckId::DeepHierarchy.code(), "DEP-01");
    }

    #[test]
    fn check_id_display_matches_code() {
        assert_eq!(CheckId::CircularChain.to_string(), "STR-02");
    }

    #[test]
    fn location_display() {
        assert_eq!(Location::Employee { id: 5 }.to_string(), "employee 5");
        assert_eq!(Location::Manager { id: 7 }.to_string(), "manager 7");
        assert_eq!(Location::Global.to_string(), "(population)");
    }

    #[test]
    fn diagnostic_display_carries_severity_tag() {
        let d = Diagnostic::new(
            CheckId::Underpaid,
            Severity::Warning,
            Location::Manager { id: 3 },
            "is UNDERPAID by 25",
        );
        let s = d.to_string();
        assert!(s.starts_with("[W]"), "display: {s}");
        assert!(s.contains("PAY-01"), "display: {s}");
        assert!(s.contains("manager 3"), "display: {s}");
    }

    #[test]
    fn empty_result_is_conformant() {
        let r = AnalysisResult::new();
        assert!(r.is_conformant());
        assert!(!r.has_errors());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn warnings_alone_keep_conformance() {
        let r = AnalysisResult::from_diagnostics(vec![
            make(CheckId::Underpaid, Severity::Warning),
            make(CheckId::DeepHierarchy, Severity::Info),
        ]);
        assert!(r.is_conformant());
    }

    #[test]
    fn any_error_breaks_conformance() {
        let r = AnalysisResult::from_diagnostics(vec![
            make(CheckId::Underpaid, Severity::Warning),
            make(CheckId::CircularChain, Severity::Error),
        ]);
        assert!(r.has_errors());
        assert!(!r.is_conformant());
    }

    #[test]
    fn severity_iterators_partition_findings() {
        let r = AnalysisResult::from_diagnostics(vec![
            make(CheckId::MultipleRoots, Severity::Error),
            make(CheckId::Overpaid, Severity::Warning),
            make(CheckId::Overpaid, Severity::Warning),
            make(CheckId::DeepHierarchy, Severity::Info),
        ]);
        assert_eq!(r.errors().count(), 1);
        assert_eq!(r.warnings().count(), 2);
        assert_eq!(r.infos().count(), 1);
    }

    #[test]
    fn by_check_filters_on_check_id() {
        let r = AnalysisResult::from_diagnostics(vec![
            make(CheckId::CircularChain, Severity::Error),
            make(CheckId::CircularChain, Severity::Error),
            make(CheckId::MultipleRoots, Severity::Error),
        ]);
        assert_eq!(r.by_check(CheckId::CircularChain).count(), 2);
        assert_eq!(r.by_check(CheckId::TwoPersonOrg).count(), 0);
    }
}
