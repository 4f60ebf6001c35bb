// Department/level filtering.
//
// A filtered view is an independent copy of the matching rows; computing
// over it can never touch the cached dataset.
use crate::types::EmployeeRecord;
use std::collections::BTreeSet;

/// The two multi-select filter dimensions. An empty set selects nothing,
/// which yields an empty view rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub departments: BTreeSet<String>,
    pub levels: BTreeSet<String>,
}

impl FilterSpec {
    /// The untouched-filters default: every observed category selected.
    pub fn all_observed(rows: &[EmployeeRecord]) -> Self {
        FilterSpec {
            departments: rows.iter().map(|r| r.department.clone()).collect(),
            levels: rows.iter().map(|r| r.level.clone()).collect(),
        }
    }

    /// Rows whose department AND level are both selected.
    pub fn apply(&self, rows: &[EmployeeRecord]) -> Vec<EmployeeRecord> {
        rows.iter()
            .filter(|r| self.departments.contains(&r.department) && self.levels.contains(&r.level))
            .cloned()
            .collect()
    }
}

/// Distinct departments, sorted, for the selector UI.
pub fn observed_departments(rows: &[EmployeeRecord]) -> Vec<String> {
    let set: BTreeSet<String> = rows.iter().map(|r| r.department.clone()).collect();
    set.into_iter().collect()
}

/// Distinct levels, sorted, for the selector UI.
pub fn observed_levels(rows: &[EmployeeRecord]) -> Vec<String> {
    let set: BTreeSet<String> = rows.iter().map(|r| r.level.clone()).collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(department: &str, level: &str) -> EmployeeRecord {
        EmployeeRecord {
            department: department.to_string(),
            level: level.to_string(),
            quantity: 1.0,
            ..EmployeeRecord::default()
        }
    }

    fn sample() -> Vec<EmployeeRecord> {
        vec![
            rec("Operaciones", "Senior"),
            rec("Operaciones", "Junior"),
            rec("TI", "Senior"),
            rec("Finanzas", "Director"),
        ]
    }

    #[test]
    fn all_observed_returns_the_full_table() {
        let rows = sample();
        let filtered = FilterSpec::all_observed(&rows).apply(&rows);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn empty_department_selection_yields_no_rows() {
        let rows = sample();
        let mut spec = FilterSpec::all_observed(&rows);
        spec.departments.clear();
        assert!(spec.apply(&rows).is_empty());
    }

    #[test]
    fn both_dimensions_must_match() {
        let rows = sample();
        let spec = FilterSpec {
            departments: ["Operaciones", "TI"].iter().map(|s| s.to_string()).collect(),
            levels: std::iter::once("Senior".to_string()).collect(),
        };
        let filtered = spec.apply(&rows);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.level == "Senior"));
    }

    #[test]
    fn observed_categories_are_sorted_and_distinct() {
        let rows = sample();
        assert_eq!(
            observed_departments(&rows),
            vec!["Finanzas", "Operaciones", "TI"]
        );
        assert_eq!(observed_levels(&rows), vec!["Director", "Junior", "Senior"]);
    }

    #[test]
    fn filtering_does_not_mutate_the_source() {
        let rows = sample();
        let before = rows.clone();
        let mut filtered = FilterSpec::all_observed(&rows).apply(&rows);
        if let Some(first) = filtered.first_mut() {
            first.department = "Mutated".to_string();
        }
        assert_eq!(rows, before);
    }
}
