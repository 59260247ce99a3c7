//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{OutputConfig, PayrollConfig, PayrollRules};

/// Loads and provides access to payroll configuration.
///
/// # File Format
///
/// ```yaml
/// rules:
///   overtime_multiplier: "1.5"
///   weeks_per_month: 4
///   missing_fields: warn   # or reject
/// output:
///   currency_symbol: "€"
///   csv_path: salary_statistics.csv
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_stats::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Overtime multiplier: {}", loader.rules().overtime_multiplier);
/// # Ok::<(), salary_stats::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML, has unknown keys, or holds invalid
    ///   rule values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|err| match err {
            PayrollError::ConfigParseError { message, .. } => PayrollError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, rules = ?loader.rules(), "Loaded payroll configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        // An empty document means "all defaults".
        let config: PayrollConfig = if content.trim().is_empty() {
            PayrollConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: PayrollConfig) -> PayrollResult<Self> {
        config
            .rules
            .validate()
            .map_err(|message| PayrollError::ConfigParseError {
                path: "<inline>".to_string(),
                message,
            })?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the salary formula rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.config.rules
    }

    /// Returns the report and export settings.
    pub fn output(&self) -> &OutputConfig {
        &self.config.output
    }
}
