//! Salary statistics models.
//!
//! [`SalaryStatistics`] is the global-scope record; [`SubsidiaryStatistics`]
//! adds the subsidiary's employee list on top of the same figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeSalary, SubsidiaryMap};

/// Average, highest, and lowest monthly salary of a set of employees.
///
/// The default value (all zeros) stands for an empty set.
///
/// The average is exact in memory but serializes as a JSON number, so
/// consumers may see float rounding in its last digits.
///
/// # Example
///
/// ```
/// use salary_stats::models::SalaryStatistics;
/// use rust_decimal::Decimal;
///
/// let empty = SalaryStatistics::default();
/// assert_eq!(empty.average_salary, Decimal::ZERO);
/// assert_eq!(empty.highest_salary, 0);
/// assert_eq!(empty.lowest_salary, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryStatistics {
    /// Arithmetic mean of the salaries.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_salary: Decimal,
    /// Maximum salary.
    pub highest_salary: i64,
    /// Minimum salary.
    pub lowest_salary: i64,
}

/// Statistics for one subsidiary together with its employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidiaryStatistics {
    /// Figures over this subsidiary's employees.
    #[serde(flatten)]
    pub statistics: SalaryStatistics,
    /// The subsidiary's employees in calculator order.
    pub employee_salary: Vec<EmployeeSalary>,
}

impl SubsidiaryStatistics {
    /// Returns the employees sorted by descending monthly salary.
    ///
    /// Employees with equal salaries keep their calculator order.
    pub fn employees_by_salary_desc(&self) -> Vec<&EmployeeSalary> {
        let mut employees: Vec<&EmployeeSalary> = self.employee_salary.iter().collect();
        employees.sort_by(|a, b| b.monthly_salary.cmp(&a.monthly_salary));
        employees
    }
}

/// Per-subsidiary statistics in roster order.
pub type SubsidiaryStatisticsMap = SubsidiaryMap<SubsidiaryStatistics>;
