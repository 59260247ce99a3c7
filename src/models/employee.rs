//! Raw employee wage records.
//!
//! This module defines [`RawEmployeeRecord`], the per-employee input to the
//! salary calculator, and [`WageField`], which names its numeric fields in
//! warnings and errors.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Names one of the numeric wage fields of a [`RawEmployeeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageField {
    /// Currency per hour.
    HourlyRate,
    /// Hours actually worked in a week.
    WeeklyHoursWorked,
    /// Contractually expected weekly hours.
    ContractHours,
}

impl WageField {
    /// All wage fields, in the order they are validated.
    pub const ALL: [WageField; 3] = [
        WageField::HourlyRate,
        WageField::WeeklyHoursWorked,
        WageField::ContractHours,
    ];

    /// Returns the field name as it appears in employee data.
    pub fn as_str(self) -> &'static str {
        match self {
            WageField::HourlyRate => "hourly_rate",
            WageField::WeeklyHoursWorked => "weekly_hours_worked",
            WageField::ContractHours => "contract_hours",
        }
    }
}

impl fmt::Display for WageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employee's wage inputs as supplied by the data loader.
///
/// Numeric fields are optional so that missing data stays visible to the
/// calculator instead of silently becoming zero at parse time.
///
/// # Example
///
/// ```
/// use salary_stats::models::RawEmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let record: RawEmployeeRecord = serde_json::from_str(
///     r#"{"name": "Alice", "job": "Engineer", "hourly_rate": 20, "weekly_hours_worked": 35}"#,
/// ).unwrap();
/// assert_eq!(record.hourly_rate, Some(Decimal::from(20)));
/// assert_eq!(record.contract_hours, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEmployeeRecord {
    /// Employee display name.
    pub name: String,
    /// Role or title label.
    #[serde(default)]
    pub job: String,
    /// Currency per hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// Hours actually worked in a week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_hours_worked: Option<Decimal>,
    /// Contractually expected weekly hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_hours: Option<Decimal>,
}

impl RawEmployeeRecord {
    /// Creates a record with every wage field present.
    pub fn new(
        name: impl Into<String>,
        job: impl Into<String>,
        hourly_rate: Decimal,
        weekly_hours_worked: Decimal,
        contract_hours: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
            hourly_rate: Some(hourly_rate),
            weekly_hours_worked: Some(weekly_hours_worked),
            contract_hours: Some(contract_hours),
        }
    }

    /// Returns the value recorded for a wage field, if any.
    pub fn field(&self, field: WageField) -> Option<Decimal> {
        match field {
            WageField::HourlyRate => self.hourly_rate,
            WageField::WeeklyHoursWorked => self.weekly_hours_worked,
            WageField::ContractHours => self.contract_hours,
        }
    }

    /// Returns the wage fields that are absent from this record.
    pub fn missing_fields(&self) -> Vec<WageField> {
        WageField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_none())
            .collect()
    }
}
