//! Calculator output models.

use serde::{Deserialize, Serialize};

use super::{SubsidiaryMap, WageField};

/// One employee's computed monthly salary.
///
/// Built fresh by the calculator from a [`RawEmployeeRecord`](super::RawEmployeeRecord);
/// the source record is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalary {
    /// Employee display name, copied from the raw record.
    pub name: String,
    /// Role or title label, copied from the raw record.
    pub job: String,
    /// Monthly salary truncated toward zero.
    pub monthly_salary: i64,
}

/// Monthly salaries grouped by subsidiary, in roster order.
pub type SalaryMap = SubsidiaryMap<Vec<EmployeeSalary>>;

/// A wage field that was absent from an employee record and treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFieldWarning {
    /// The subsidiary the employee belongs to.
    pub subsidiary: String,
    /// The employee's display name.
    pub employee: String,
    /// Zero-based position of the employee within the subsidiary.
    pub position: usize,
    /// The field that was missing.
    pub field: WageField,
}

impl MissingFieldWarning {
    /// Human-readable description of the warning.
    pub fn message(&self) -> String {
        format!(
            "{} missing for '{}' (#{}) in '{}'; treated as 0",
            self.field, self.employee, self.position, self.subsidiary
        )
    }
}

/// The output of the salary calculator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// Salaries per subsidiary, in roster order.
    pub salaries: SalaryMap,
    /// Missing wage fields that defaulted to zero.
    pub warnings: Vec<MissingFieldWarning>,
}

impl SalaryCalculation {
    /// Total number of employees across all subsidiaries.
    pub fn employee_count(&self) -> usize {
        self.salaries.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_warning_message() {
        let warning = MissingFieldWarning {
            subsidiary: "TechCorp".to_string(),
            employee: "Alice".to_string(),
            position: 2,
            field: WageField::ContractHours,
        };
        assert_eq!(
            warning.message(),
            "contract_hours missing for 'Alice' (#2) in 'TechCorp'; treated as 0"
        );
    }

    #[test]
    fn test_employee_count_spans_subsidiaries() {
        let mut salaries = SalaryMap::new();
        salaries.insert(
            "A",
            vec![
                EmployeeSalary {
                    name: "x".to_string(),
                    job: "j".to_string(),
                    monthly_salary: 1,
                },
                EmployeeSalary {
                    name: "y".to_string(),
                    job: "j".to_string(),
                    monthly_salary: 2,
                },
            ],
        );
        salaries.insert("B", vec![]);

        let calculation = SalaryCalculation {
            salaries,
            warnings: vec![],
        };
        assert_eq!(calculation.employee_count(), 2);
    }

    #[test]
    fn test_employee_salary_serializes_integer_salary() {
        let salary = EmployeeSalary {
            name: "Alice".to_string(),
            job: "Engineer".to_string(),
            monthly_salary: 2800,
        };
        let json = serde_json::to_value(&salary).unwrap();
        assert_eq!(json["monthly_salary"], 2800);
    }
}
