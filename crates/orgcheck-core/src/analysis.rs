/// The analysis engine: phases, the check trait, the registry, and the
/// dispatch loop.
///
/// Mirrors the shape of the input contract: the [`crate::OrgIndex`] is built
/// once, then every active check reads it without mutating shared state, so
/// checks are independent and could run in any order. The registry fixes a
/// deterministic order anyway: structural checks, then compensation checks,
/// then the depth reporter.
use crate::diagnostics::{AnalysisResult, CheckId, Diagnostic, Severity};
use crate::index::OrgIndex;

/// Depth threshold used by the end-to-end flow when none is configured.
pub const DEFAULT_DEPTH_THRESHOLD: u32 = 4;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The analysis phase a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Structural-integrity checks — violations make the hierarchy invalid.
    Structure,
    /// Compensation-band checks — violations are policy warnings.
    Compensation,
    /// Hierarchy-depth reporting — observations only.
    Depth,
}

impl Phase {
    /// Returns the default [`Severity`] of findings produced at this phase.
    pub fn severity(self) -> Severity {
        match self {
            Self::Structure => Severity::Error,
            Self::Compensation => Severity::Warning,
            Self::Depth => Severity::Info,
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisRule
// ---------------------------------------------------------------------------

/// A single, stateless analysis check over an [`OrgIndex`].
///
/// Checks push zero or more [`Diagnostic`] values into the provided `diags`
/// vector; a check that finds nothing wrong pushes nothing. Checks hold no
/// mutable state and receive the index only by shared reference, so the
/// dispatch loop in [`analyze`] can call them in any order without
/// coordination. The trait is object-safe; the registry stores checks as
/// `Vec<Box<dyn AnalysisRule>>`.
pub trait AnalysisRule {
    /// The unique identifier for this check.
    fn id(&self) -> CheckId;

    /// The analysis phase this check belongs to.
    fn phase(&self) -> Phase;

    /// The default severity of findings produced by this check.
    ///
    /// Derived from [`phase`][AnalysisRule::phase]. A check may emit
    /// individual findings at a different severity (the two-person
    /// degenerate-org warning and the no-subordinates note do).
    fn severity(&self) -> Severity {
        self.phase().severity()
    }

    /// Inspect `org` and push any findings into `diags`.
    ///
    /// Called exactly once per analysis pass. `config` carries the tunable
    /// parameters (currently only the depth threshold); checks that need no
    /// configuration ignore it.
    fn check(&self, org: &OrgIndex, config: &AnalysisConfig, diags: &mut Vec<Diagnostic>);
}

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

/// Controls which analysis phases are active and their parameters.
///
/// # Default
///
/// ```
/// # use orgcheck_core::{AnalysisConfig, DEFAULT_DEPTH_THRESHOLD};
/// let cfg = AnalysisConfig::default();
/// assert!(cfg.run_structure);
/// assert!(cfg.run_compensation);
/// assert!(cfg.run_depth);
/// assert_eq!(cfg.depth_threshold, DEFAULT_DEPTH_THRESHOLD);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Run the structural-integrity checks.
    pub run_structure: bool,
    /// Run the compensation-band checks.
    pub run_compensation: bool,
    /// Run the depth reporter.
    pub run_depth: bool,
    /// An employee whose manager-hop count strictly exceeds this threshold
    /// is reported by the depth phase.
    pub depth_threshold: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            run_structure: true,
            run_compensation: true,
            run_depth: true,
            depth_threshold: DEFAULT_DEPTH_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Registry and dispatch
// ---------------------------------------------------------------------------

/// Builds the ordered check registry for the given configuration.
///
/// Returns every built-in check whose phase is enabled in `config`, in the
/// fixed reporting order: structure, compensation, depth. Checks are
/// compiled into `orgcheck-core`; this is not a plugin system.
pub fn build_registry(config: &AnalysisConfig) -> Vec<Box<dyn AnalysisRule>> {
    use crate::depth::DeepHierarchy;
    use crate::rules_compensation::{NoSubordinates, Overpaid, Underpaid};
    use crate::rules_structure::{
        CircularChain, MultipleManagers, MultipleRoots, TwoPersonOrg,
    };

    let mut registry: Vec<Box<dyn AnalysisRule>> = Vec::new();

    if config.run_structure {
        registry.push(Box::new(MultipleManagers));
        registry.push(Box::new(CircularChain));
        registry.push(Box::new(MultipleRoots));
        registry.push(Box::new(TwoPersonOrg));
    }

    if config.run_compensation {
        registry.push(Box::new(Underpaid));
        registry.push(Box::new(Overpaid));
        registry.push(Box::new(NoSubordinates));
    }

    if config.run_depth {
        registry.push(Box::new(DeepHierarchy));
    }

    registry
}

/// Runs the full analysis pass over a built [`OrgIndex`].
///
/// Builds the check registry from `config`, walks it linearly, and collects
/// all findings. The engine never fails fast — every active check runs to
/// completion and one check's findings never suppress another's. Re-running
/// on the same index yields an identical result.
pub fn analyze(org: &OrgIndex, config: &AnalysisConfig) -> AnalysisResult {
    let registry = build_registry(config);
    let mut diags: Vec<Diagnostic> = Vec::new();
    for rule in &registry {
        rule.check(org, config, &mut diags);
    }
    AnalysisResult::from_diagnostics(diags)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
