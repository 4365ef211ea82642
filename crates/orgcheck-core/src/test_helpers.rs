//! Shared test helper functions for constructing employee fixtures.
//!
//! Compiled only in test builds. Integration tests in
//! `crates/orgcheck-core/tests/` define their own local helpers because they
//! link against the non-test library build where this module is not
//! available.

use crate::employee::{Employee, EmployeeId};

/// Builds an employee with a generated name (`Emp<id> Test`).
pub fn emp(id: EmployeeId, salary: f64, manager_id: Option<EmployeeId>) -> Employee {
    Employee {
        id,
        first_name: format!("Emp{id}"),
        last_name: "Test".to_owned(),
        salary,
        manager_id,
    }
}

/// Builds an employee with an explicit name.
pub fn named(
    id: EmployeeId,
    first: &str,
    last: &str,
    salary: f64,
    manager_id: Option<EmployeeId>,
) -> Employee {
    Employee {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        salary,
        manager_id,
    }
}
