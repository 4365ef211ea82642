/// The employee record — the single input entity of the analysis engine.
///
/// Records are produced once by the data source (the CLI's CSV parser),
/// handed to [`crate::OrgIndex::build`], and never mutated. The serde field
/// names follow the camelCase header row of the input format
/// (`id,firstName,lastName,salary,managerId`).
use serde::{Deserialize, Serialize};

/// The identifier type used for employees and manager references.
///
/// Intended to be unique per employee, but uniqueness is not guaranteed by
/// construction — see [`crate::OrgIndex`] for the duplicate-id policy.
pub type EmployeeId = u32;

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Employee identifier, intended-unique across the population.
    pub id: EmployeeId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gross salary. Non-negative by convention; the engine does not reject
    /// negative values, it only reads them.
    pub salary: f64,
    /// Identifier of this employee's manager. `None` marks a candidate root.
    pub manager_id: Option<EmployeeId>,
}

impl Employee {
    /// Returns `"First Last"` for use in finding messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns `true` if this record carries no manager reference.
    pub fn has_no_manager(&self) -> bool {
        self.manager_id.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let e = Employee {
            id: 1,
            first_name: "Joe".to_owned(),
            last_name: "Doe".to_owned(),
            salary: 60_000.0,
            manager_id: None,
        };
        assert_eq!(e.full_name(), "Joe Doe");
    }

    #[test]
    fn has_no_manager_reflects_manager_id() {
        let root = Employee {
            id: 1,
            first_name: "Joe".to_owned(),
            last_name: "Doe".to_owned(),
            salary: 60_000.0,
            manager_id: None,
        };
        let report = Employee {
            manager_id: Some(1),
            ..root.clone()
        };
        assert!(root.has_no_manager());
        assert!(!report.has_no_manager());
    }

    #[test]
    fn serde_field_names_are_camel_case() {
        let e = Employee {
            id: 7,
            first_name: "Ada".to_owned(),
            last_name: "Byron".to_owned(),
            salary: 120.5,
            manager_id: Some(3),
        };
        let json = serde_json::to_string(&e).expect("serialize");
        assert!(json.contains("\"firstName\""), "json: {json}");
        assert!(json.contains("\"lastName\""), "json: {json}");
        assert!(json.contains("\"managerId\""), "json: {json}");
    }

    #[test]
    fn missing_manager_id_deserializes_to_none() {
        let src = r#"{"id":7,"firstName":"Ada","lastName":"Byron","salary":120.5,"managerId":null}"#;
        let parsed: Employee = serde_json::from_str(src).expect("deserialize");
        assert_eq!(parsed.manager_id, None);
        assert_eq!(parsed.id, 7);
    }
}
