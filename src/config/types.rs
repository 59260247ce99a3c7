//! Configuration types for payroll runs.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every key is optional
//! and falls back to the standard payroll rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the calculator does when a wage field is absent from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Treat the field as zero and record a warning.
    #[default]
    Warn,
    /// Fail the run with a missing wage data error.
    Reject,
}

/// Rules governing the monthly salary formula.
///
/// # Example
///
/// ```
/// use salary_stats::config::{MissingFieldPolicy, PayrollRules};
/// use rust_decimal::Decimal;
///
/// let rules = PayrollRules::default();
/// assert_eq!(rules.overtime_multiplier, Decimal::new(15, 1));
/// assert_eq!(rules.weeks_per_month, 4);
/// assert_eq!(rules.missing_fields, MissingFieldPolicy::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollRules {
    /// Multiplier applied to the hourly rate for hours beyond contract hours.
    pub overtime_multiplier: Decimal,
    /// Number of weeks a weekly figure is projected over.
    pub weeks_per_month: u32,
    /// Handling of absent wage fields.
    pub missing_fields: MissingFieldPolicy,
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            overtime_multiplier: Decimal::new(15, 1),
            weeks_per_month: 4,
            missing_fields: MissingFieldPolicy::Warn,
        }
    }
}

impl PayrollRules {
    /// Checks the rules for values that would make the formula meaningless.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.overtime_multiplier < Decimal::ONE {
            return Err(format!(
                "rules.overtime_multiplier must be at least 1, got {}",
                self.overtime_multiplier
            ));
        }
        if self.weeks_per_month == 0 {
            return Err("rules.weeks_per_month must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Presentation settings for the console report and CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Currency symbol used in report labels.
    pub currency_symbol: String,
    /// Default CSV export destination.
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            csv_path: "salary_statistics.csv".to_string(),
        }
    }
}

/// The complete configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    /// Salary formula rules.
    pub rules: PayrollRules,
    /// Report and export settings.
    pub output: OutputConfig,
}
