#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod analysis;
pub mod depth;
pub mod diagnostics;
pub mod employee;
pub mod index;
pub mod rules_compensation;
pub mod rules_structure;
#[cfg(test)]
pub mod test_helpers;

pub use analysis::{
    AnalysisConfig, AnalysisRule, DEFAULT_DEPTH_THRESHOLD, Phase, analyze, build_registry,
};
pub use depth::{DeepHierarchy, depth_to_root};
pub use diagnostics::{AnalysisResult, CheckId, Diagnostic, Location, Severity};
pub use employee::{Employee, EmployeeId};
pub use index::OrgIndex;
pub use rules_compensation::{
    BandStats, MAX_BAND_FACTOR, MIN_BAND_FACTOR, NoSubordinates, Overpaid, Underpaid, band_stats,
};
pub use rules_structure::{CircularChain, MultipleManagers, MultipleRoots, TwoPersonOrg};

/// Returns the current version of the orgcheck-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
