//! End-to-end payroll run.
//!
//! Chains the calculator and both aggregations and stamps the result with
//! an id, timestamp, and duration.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::PayrollRules;
use crate::error::PayrollResult;
use crate::models::{PayrollReport, SubsidiaryRoster};

use super::salary::calculate_monthly_salaries_with;
use super::statistics::{compute_global_statistics, compute_subsidiary_statistics};

/// The engine version recorded in every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the full pipeline over a roster.
///
/// # Examples
///
/// ```
/// use salary_stats::calculation::run_payroll;
/// use salary_stats::config::PayrollRules;
/// use salary_stats::models::SubsidiaryRoster;
///
/// let roster: SubsidiaryRoster = serde_json::from_str(r#"{
///     "TechCorp": [
///         {"name": "Alice", "job": "Engineer", "hourly_rate": 20, "weekly_hours_worked": 35, "contract_hours": 40},
///         {"name": "Bob", "job": "Engineer", "hourly_rate": 20, "weekly_hours_worked": 45, "contract_hours": 40}
///     ],
///     "Empty": []
/// }"#).unwrap();
///
/// let report = run_payroll(&roster, &PayrollRules::default()).unwrap();
/// assert_eq!(report.employee_count, 2);
/// assert_eq!(report.global_statistics.highest_salary, 3800);
/// assert_eq!(report.subsidiary_statistics.len(), 1);
/// ```
pub fn run_payroll(roster: &SubsidiaryRoster, rules: &PayrollRules) -> PayrollResult<PayrollReport> {
    let start_time = Instant::now();

    let calculation = calculate_monthly_salaries_with(roster, rules)?;
    let global_statistics = compute_global_statistics(&calculation.salaries);
    let subsidiary_statistics = compute_subsidiary_statistics(&calculation.salaries);
    let employee_count = calculation.employee_count();

    let report = PayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee_count,
        global_statistics,
        subsidiary_statistics,
        warnings: calculation.warnings,
        duration_us: start_time.elapsed().as_micros() as u64,
    };

    info!(
        report_id = %report.report_id,
        subsidiaries = roster.len(),
        employees = employee_count,
        warnings = report.warnings.len(),
        average_salary = %report.global_statistics.average_salary.round_dp(2),
        duration_us = report.duration_us,
        "Payroll run completed"
    );

    Ok(report)
}
