/// Hierarchy-depth measurement and the deep-hierarchy check (DEP-01).
use std::collections::HashSet;

use crate::analysis::{AnalysisConfig, AnalysisRule, Phase};
use crate::diagnostics::{CheckId, Diagnostic, Location};
use crate::employee::{Employee, EmployeeId};
use crate::index::OrgIndex;

// ---------------------------------------------------------------------------
// depth_to_root
// ---------------------------------------------------------------------------

/// Counts the manager hops from `employee` to the top of its chain.
///
/// Each resolvable manager reference counts as one hop. A dangling
/// reference truncates the count silently — the hop to the unknown id is
/// still counted, then the walk stops. A revisited id also ends the walk:
/// a cyclic chain has no meaningful depth, and cycle membership is reported
/// by the circular-chain check, so the count is simply truncated at the
/// point of revisit.
pub fn depth_to_root(employee: &Employee, org: &OrgIndex) -> u32 {
    let mut visited: HashSet<EmployeeId> = HashSet::new();
    let mut hops: u32 = 0;
    let mut next = employee.manager_id;
    while let Some(manager_id) = next {
        if !visited.insert(manager_id) {
            break;
        }
        hops += 1;
        match org.employee(manager_id) {
            Some(manager) => next = manager.manager_id,
            None => break,
        }
    }
    hops
}

// ---------------------------------------------------------------------------
// DEP-01: deep reporting chains
// ---------------------------------------------------------------------------

/// Reports every employee whose manager-hop count strictly exceeds
/// `config.depth_threshold`. Walks the full input sequence in input order,
/// duplicates included — each record describes its own chain.
pub struct DeepHierarchy;

impl AnalysisRule for DeepHierarchy {
    fn id(&self) -> CheckId {
        CheckId::DeepHierarchy
    }

    fn phase(&self) -> Phase {
        Phase::Depth
    }

    fn check(&self, org: &OrgIndex, config: &AnalysisConfig, diags: &mut Vec<Diagnostic>) {
        for employee in org.employees() {
            let hops = depth_to_root(employee, org);
            if hops > config.depth_threshold {
                diags.push(Diagnostic::new(
                    self.id(),
                    self.severity(),
                    Location::Employee { id: employee.id },
                    format!(
                        "{} has {hops} managers between them and the top of the hierarchy",
                        employee.full_name()
                    ),
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::emp;

    fn chain(len: u32) -> OrgIndex {
        let mut employees = vec![emp(1, 100.0, None)];
        for id in 2..=len {
            employees.push(emp(id, 100.0, Some(id - 1)));
        }
        OrgIndex::build(employees)
    }

    fn run_with_threshold(org: &OrgIndex, threshold: u32) -> Vec<Diagnostic> {
        let config = AnalysisConfig {
            depth_threshold: threshold,
            ..AnalysisConfig::default()
        };
        let mut diags = Vec::new();
        DeepHierarchy.check(org, &config, &mut diags);
        diags
    }

    #[test]
    fn root_has_depth_zero() {
        let org = chain(1);
        let root = org.employee(1).cloned();
        assert_eq!(root.map(|e| depth_to_root(&e, &org)), Some(0));
    }

    #[test]
    fn five_level_chain_has_four_hops_at_the_leaf() {
        // root → m1 → m2 → m3 → m4 → leaf: leaf (id 6) has 5 hops,
        // its manager (id 5) has 4.
        let org = chain(6);
        let m4 = org.employee(5).cloned();
        let leaf = org.employee(6).cloned();
        assert_eq!(m4.map(|e| depth_to_root(&e, &org)), Some(4));
        assert_eq!(leaf.map(|e| depth_to_root(&e, &org)), Some(5));
    }

    #[test]
    fn dangling_reference_truncates_the_count() {
        // 2 → 77 (unknown): the hop to 77 counts, then the walk stops.
        let org = OrgIndex::build(vec![emp(1, 100.0, None), emp(2, 80.0, Some(77))]);
        let e = org.employee(2).cloned();
        assert_eq!(e.map(|e| depth_to_root(&e, &org)), Some(1));
    }

    #[test]
    fn cyclic_chain_terminates_with_a_truncated_count() {
        let org = OrgIndex::build(vec![
            emp(1, 100.0, Some(2)),
            emp(2, 100.0, Some(3)),
            emp(3, 100.0, Some(1)),
        ]);
        let e = org.employee(1).cloned();
        // Walk: 2, 3, 1, then 2 is revisited — three hops, then stop.
        assert_eq!(e.map(|e| depth_to_root(&e, &org)), Some(3));
    }

    #[test]
    fn threshold_is_strictly_exceeded() {
        // Chain of 6: leaf has exactly 5 hops; its manager has 4.
        let org = chain(6);
        let diags = run_with_threshold(&org, 4);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].location, Location::Employee { id: 6 });
        assert!(
            diags[0].message.contains("has 5 managers"),
            "message: {}",
            diags[0].message
        );
    }

    #[test]
    fn default_threshold_flags_sixth_level_descendants() {
        // Chain of 7: ids 6 (5 hops) and 7 (6 hops) exceed 4.
        let org = chain(7);
        let diags = run_with_threshold(&org, 4);
        let flagged: Vec<Location> = diags.iter().map(|d| d.location).collect();
        assert_eq!(
            flagged,
            vec![Location::Employee { id: 6 }, Location::Employee { id: 7 }]
        );
    }

    #[test]
    fn zero_threshold_flags_everyone_below_the_root() {
        let org = chain(3);
        assert_eq!(run_with_threshold(&org, 0).len(), 2);
    }

    #[test]
    fn findings_follow_input_order() {
        let org = OrgIndex::build(vec![
            emp(1, 100.0, None),
            emp(5, 80.0, Some(4)),
            emp(4, 80.0, Some(3)),
            emp(3, 80.0, Some(2)),
            emp(2, 80.0, Some(1)),
        ]);
        let diags = run_with_threshold(&org, 1);
        let flagged: Vec<Location> = diags.iter().map(|d| d.location).collect();
        // Input order, not id order.
        assert_eq!(
            flagged,
            vec![
                Location::Employee { id: 5 },
                Location::Employee { id: 4 },
                Location::Employee { id: 3 },
            ]
        );
    }
}
