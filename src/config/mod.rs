//! Configuration loading and management for payroll runs.
//!
//! This module loads the salary formula rules and report settings from a
//! YAML file. Missing keys fall back to the standard rules (1.5x overtime,
//! 4-week month, warn on missing wage fields).
//!
//! # Example
//!
//! ```no_run
//! use salary_stats::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Weeks per month: {}", config.rules().weeks_per_month);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MissingFieldPolicy, OutputConfig, PayrollConfig, PayrollRules};
