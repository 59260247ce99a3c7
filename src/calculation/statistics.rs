//! Salary statistics aggregation.
//!
//! Two independent operations share [`salary_figures`]:
//!
//! - [`compute_global_statistics`] covers every employee of every
//!   subsidiary and falls back to all-zero figures for an empty set.
//! - [`compute_subsidiary_statistics`] produces one record per subsidiary
//!   that has employees. Subsidiaries without employees are left out of
//!   the result rather than reported with zeros.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    EmployeeSalary, SalaryMap, SalaryStatistics, SubsidiaryStatistics, SubsidiaryStatisticsMap,
};

/// Computes average, highest, and lowest salary over a set of employees.
///
/// Returns `None` when the set is empty.
///
/// # Examples
///
/// ```
/// use salary_stats::calculation::salary_figures;
/// use salary_stats::models::EmployeeSalary;
/// use rust_decimal::Decimal;
///
/// let employees = vec![
///     EmployeeSalary { name: "Alice".into(), job: "Engineer".into(), monthly_salary: 2800 },
///     EmployeeSalary { name: "Bob".into(), job: "Engineer".into(), monthly_salary: 3800 },
/// ];
/// let figures = salary_figures(&employees).unwrap();
/// assert_eq!(figures.average_salary, Decimal::from(3300));
/// assert_eq!(figures.highest_salary, 3800);
/// assert_eq!(figures.lowest_salary, 2800);
///
/// assert!(salary_figures(&Vec::<EmployeeSalary>::new()).is_none());
/// ```
pub fn salary_figures<'a, I>(employees: I) -> Option<SalaryStatistics>
where
    I: IntoIterator<Item = &'a EmployeeSalary>,
{
    let mut count: u64 = 0;
    let mut total = Decimal::ZERO;
    let mut highest = i64::MIN;
    let mut lowest = i64::MAX;

    for salary in employees.into_iter().map(|e| e.monthly_salary) {
        count += 1;
        total += Decimal::from(salary);
        highest = highest.max(salary);
        lowest = lowest.min(salary);
    }

    if count == 0 {
        return None;
    }

    Some(SalaryStatistics {
        average_salary: total / Decimal::from(count),
        highest_salary: highest,
        lowest_salary: lowest,
    })
}

/// Computes statistics over every employee in every subsidiary.
///
/// Returns [`SalaryStatistics::default`] (all zeros) when there are no
/// employees at all.
pub fn compute_global_statistics(salaries: &SalaryMap) -> SalaryStatistics {
    let statistics = salary_figures(salaries.values().flatten()).unwrap_or_default();

    debug!(
        subsidiaries = salaries.len(),
        average_salary = %statistics.average_salary.normalize(),
        highest_salary = statistics.highest_salary,
        lowest_salary = statistics.lowest_salary,
        "Computed global salary statistics"
    );

    statistics
}

/// Computes statistics for each subsidiary that has at least one employee.
///
/// Each record carries the subsidiary's employees in calculator order.
/// Subsidiaries with no employees are omitted; the remaining entries keep
/// the order of `salaries`.
pub fn compute_subsidiary_statistics(salaries: &SalaryMap) -> SubsidiaryStatisticsMap {
    let mut result = SubsidiaryStatisticsMap::with_capacity(salaries.len());

    for (subsidiary, employees) in salaries.iter() {
        let Some(statistics) = salary_figures(employees) else {
            debug!(subsidiary = %subsidiary, "Skipping subsidiary with no employees");
            continue;
        };

        result.insert(
            subsidiary,
            SubsidiaryStatistics {
                statistics,
                employee_salary: employees.clone(),
            },
        );
    }

    result
}
