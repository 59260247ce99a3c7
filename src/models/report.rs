//! The assembled output of a payroll run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MissingFieldWarning, SalaryStatistics, SubsidiaryStatisticsMap};

/// The complete result of one pipeline run.
///
/// This is what the HTTP API returns and what the CLI prints with `--json`.
///
/// # Example
///
/// ```
/// use salary_stats::models::{PayrollReport, SalaryStatistics, SubsidiaryStatisticsMap};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = PayrollReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_count: 0,
///     global_statistics: SalaryStatistics::default(),
///     subsidiary_statistics: SubsidiaryStatisticsMap::new(),
///     warnings: vec![],
///     duration_us: 0,
/// };
/// assert!(report.subsidiary_statistics.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this run.
    pub report_id: Uuid,
    /// When the run completed.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// Number of employees processed.
    pub employee_count: usize,
    /// Statistics across every subsidiary.
    pub global_statistics: SalaryStatistics,
    /// Statistics per non-empty subsidiary.
    pub subsidiary_statistics: SubsidiaryStatisticsMap,
    /// Missing wage fields that defaulted to zero.
    pub warnings: Vec<MissingFieldWarning>,
    /// Pipeline duration in microseconds.
    pub duration_us: u64,
}
