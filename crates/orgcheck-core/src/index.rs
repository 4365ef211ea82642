/// Lookup indices built once from the flat employee sequence.
///
/// [`OrgIndex`] is the read-only snapshot every analysis rule works from:
/// the original record sequence, an id→employee index, a manager→reports
/// index, and the root count that backs the shared [`OrgIndex::is_root`]
/// predicate. Construction is a single pass and infallible; an empty input
/// yields empty indices.
use std::collections::BTreeMap;

use crate::employee::{Employee, EmployeeId};

// ---------------------------------------------------------------------------
// OrgIndex
// ---------------------------------------------------------------------------

/// The immutable input snapshot of one analysis run.
///
/// # Duplicate-id policy
///
/// `by_id` keeps the *last* record seen for a given id — later duplicates
/// silently overwrite earlier ones. This is a documented policy, not a
/// defect: all records still appear in [`employees`][OrgIndex::employees]
/// and in their report groups, only the id lookup resolves to the last one.
///
/// # Dangling references
///
/// A `manager_id` that resolves to no known employee still produces a
/// report group under that key. Consumers that need a resolvable manager
/// look the key up in `by_id` and skip the group when it is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgIndex {
    /// All input records, input order preserved.
    employees: Vec<Employee>,
    /// id → last record seen with that id.
    by_id: BTreeMap<EmployeeId, Employee>,
    /// manager id → direct reports, report insertion order preserved.
    reports: BTreeMap<EmployeeId, Vec<Employee>>,
    /// Number of distinct known employees with no manager reference.
    root_count: usize,
}

impl OrgIndex {
    /// Builds both indices from the flat record sequence in a single pass.
    pub fn build(employees: Vec<Employee>) -> Self {
        let mut by_id: BTreeMap<EmployeeId, Employee> = BTreeMap::new();
        let mut reports: BTreeMap<EmployeeId, Vec<Employee>> = BTreeMap::new();

        for employee in &employees {
            by_id.insert(employee.id, employee.clone());
            if let Some(manager_id) = employee.manager_id {
                reports.entry(manager_id).or_default().push(employee.clone());
            }
        }

        // Counted over the deduplicated index, not the raw sequence, so a
        // record overwritten by a later duplicate does not skew the count.
        let root_count = by_id.values().filter(|e| e.has_no_manager()).count();

        Self {
            employees,
            by_id,
            reports,
            root_count,
        }
    }

    /// The full input sequence, in input order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Resolves an id to the (last-seen) employee record, if any.
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.by_id.get(&id)
    }

    /// Iterates the known (deduplicated) employees in ascending-id order.
    pub fn known_employees(&self) -> impl Iterator<Item = &Employee> {
        self.by_id.values()
    }

    /// The direct reports recorded under `manager_id`, or an empty slice.
    pub fn reports(&self, manager_id: EmployeeId) -> &[Employee] {
        self.reports.get(&manager_id).map_or(&[], Vec::as_slice)
    }

    /// Iterates every report group in ascending manager-id order.
    ///
    /// Keys include dangling manager ids — ids referenced by some record
    /// but owned by no known employee.
    pub fn report_groups(&self) -> impl Iterator<Item = (EmployeeId, &[Employee])> {
        self.reports.iter().map(|(id, group)| (*id, group.as_slice()))
    }

    /// Number of known employees with no manager reference.
    pub fn root_count(&self) -> usize {
        self.root_count
    }

    /// The shared root predicate.
    ///
    /// An employee counts as the root only when it has no manager reference
    /// *and* exactly one such employee exists in the whole population. With
    /// zero or multiple manager-less employees, nobody is the root and no
    /// component treats any manager as exempt.
    pub fn is_root(&self, employee: &Employee) -> bool {
        employee.has_no_manager() && self.root_count == 1
    }

    /// Registers an empty report group under `manager_id`.
    ///
    /// [`build`][OrgIndex::build] only creates a group when some record
    /// references the manager, so groups built from records are never
    /// empty. This hook lets rule tests exercise the empty-group paths.
    #[cfg(test)]
    pub(crate) fn insert_empty_group(&mut self, manager_id: EmployeeId) {
        self.reports.entry(manager_id).or_default();
    }

    /// Number of distinct known employee ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// `true` if the index holds no known employees.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::emp;

    #[test]
    fn empty_input_yields_empty_indices() {
        let org = OrgIndex::build(Vec::new());
        assert!(org.is_empty());
        assert_eq!(org.len(), 0);
        assert_eq!(org.root_count(), 0);
        assert_eq!(org.report_groups().count(), 0);
        assert!(org.employees().is_empty());
    }

    #[test]
    fn by_id_resolves_known_ids() {
        let org = OrgIndex::build(vec![emp(1, 100.0, None), emp(2, 80.0, Some(1))]);
        assert_eq!(org.employee(1).map(|e| e.id), Some(1));
        assert_eq!(org.employee(2).map(|e| e.id), Some(2));
        assert!(org.employee(99).is_none());
    }

    #[test]
    fn duplicate_ids_last_write_wins() {
        let org = OrgIndex::build(vec![emp(1, 100.0, None), emp(1, 250.0, Some(9))]);
        let resolved = org.employee(1).map(|e| e.salary);
        assert_eq!(resolved, Some(250.0));
        // Both raw records survive in the input sequence.
        assert_eq!(org.employees().len(), 2);
        assert_eq!(org.len(), 1);
    }

    #[test]
    fn report_groups_preserve_insertion_order() {
        let org = OrgIndex::build(vec![
            emp(1, 100.0, None),
            emp(4, 50.0, Some(1)),
            emp(2, 60.0, Some(1)),
            emp(3, 70.0, Some(1)),
        ]);
        let ids: Vec<EmployeeId> = org.reports(1).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 2, 3]);
    }

    #[test]
    fn dangling_manager_id_still_forms_a_group() {
        let org = OrgIndex::build(vec![emp(1, 100.0, None), emp(2, 80.0, Some(77))]);
        assert_eq!(org.reports(77).len(), 1);
        assert!(org.employee(77).is_none());
    }

    #[test]
    fn records_without_manager_contribute_to_no_group() {
        let org = OrgIndex::build(vec![emp(1, 100.0, None)]);
        assert_eq!(org.report_groups().count(), 0);
    }

    #[test]
    fn root_count_and_is_root_single_root() {
        let org = OrgIndex::build(vec![emp(1, 100.0, None), emp(2, 80.0, Some(1))]);
        assert_eq!(org.root_count(), 1);
        let root = org.employee(1).cloned();
        let report = org.employee(2).cloned();
        assert!(root.is_some_and(|e| org.is_root(&e)));
        assert!(report.is_some_and(|e| !org.is_root(&e)));
    }

    #[test]
    fn nobody_is_root_when_two_candidates_exist() {
        let org = OrgIndex::build(vec![emp(1, 100.0, None), emp(2, 80.0, None)]);
        assert_eq!(org.root_count(), 2);
        for e in org.known_employees() {
            assert!(!org.is_root(e), "employee {} must not be root", e.id);
        }
    }

    #[test]
    fn root_count_counts_deduplicated_records() {
        // The first record for id 1 has no manager, the overwriting one does.
        let org = OrgIndex::build(vec![
            emp(1, 100.0, None),
            emp(1, 100.0, Some(2)),
            emp(2, 90.0, None),
        ]);
        assert_eq!(org.root_count(), 1);
    }
}
