//! Plain-text statistics report.
//!
//! Lists each subsidiary's employees from highest to lowest salary,
//! followed by the subsidiary's average, highest, and lowest salary.

use std::io::{self, Write};

use crate::models::{SalaryStatistics, SubsidiaryStatisticsMap};

use super::format_amount;

const RULE: &str = "========================================================";

/// Writes the per-subsidiary report.
///
/// Employees are sorted by descending monthly salary; equal salaries keep
/// their calculator order.
///
/// # Example
///
/// ```
/// use salary_stats::calculation::{calculate_monthly_salaries, compute_subsidiary_statistics};
/// use salary_stats::models::SubsidiaryRoster;
/// use salary_stats::report::write_statistics;
///
/// let roster: SubsidiaryRoster = serde_json::from_str(r#"{"TechCorp": [
///     {"name": "Alice", "job": "Engineer", "hourly_rate": 20, "weekly_hours_worked": 35, "contract_hours": 40}
/// ]}"#).unwrap();
/// let salaries = calculate_monthly_salaries(&roster).unwrap().salaries;
///
/// let mut out = Vec::new();
/// write_statistics(&mut out, &compute_subsidiary_statistics(&salaries), "€").unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Average salary: 2800.00€"));
/// ```
pub fn write_statistics<W: Write>(
    writer: &mut W,
    statistics: &SubsidiaryStatisticsMap,
    currency: &str,
) -> io::Result<()> {
    for (subsidiary, stats) in statistics.iter() {
        writeln!(writer, "Company: {}", subsidiary)?;

        for employee in stats.employees_by_salary_desc() {
            writeln!(
                writer,
                "{:<10} | {:<15} | Monthly salary: {}{}",
                employee.name,
                employee.job,
                format_amount(employee.monthly_salary.into()),
                currency
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "{}", RULE)?;
        writeln!(writer, "Salary statistics for {}:", subsidiary)?;
        write_figures(writer, &stats.statistics, currency)?;
        writeln!(writer, "{}", RULE)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes the statistics across all subsidiaries.
pub fn write_global_statistics<W: Write>(
    writer: &mut W,
    statistics: &SalaryStatistics,
    currency: &str,
) -> io::Result<()> {
    writeln!(writer, "{}", RULE)?;
    writeln!(writer, "Salary statistics for all subsidiaries:")?;
    write_figures(writer, statistics, currency)?;
    writeln!(writer, "{}", RULE)
}

fn write_figures<W: Write>(
    writer: &mut W,
    statistics: &SalaryStatistics,
    currency: &str,
) -> io::Result<()> {
    writeln!(
        writer,
        "Average salary: {}{}",
        format_amount(statistics.average_salary),
        currency
    )?;
    writeln!(
        writer,
        "Highest salary: {}{}",
        format_amount(statistics.highest_salary.into()),
        currency
    )?;
    writeln!(
        writer,
        "Lowest salary: {}{}",
        format_amount(statistics.lowest_salary.into()),
        currency
    )
}
