//! Core data models for the salary statistics engine.
//!
//! This module contains the domain models flowing through the pipeline:
//! raw roster input, calculated salaries, and aggregated statistics.

mod employee;
mod report;
mod salary;
mod statistics;
mod subsidiary_map;

pub use employee::{RawEmployeeRecord, WageField};
pub use report::PayrollReport;
pub use salary::{EmployeeSalary, MissingFieldWarning, SalaryCalculation, SalaryMap};
pub use statistics::{SalaryStatistics, SubsidiaryStatistics, SubsidiaryStatisticsMap};
pub use subsidiary_map::SubsidiaryMap;

/// Employee wage records grouped by subsidiary, in input order.
pub type SubsidiaryRoster = SubsidiaryMap<Vec<RawEmployeeRecord>>;
