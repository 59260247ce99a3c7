//! Calculation logic for the salary statistics engine.
//!
//! This module contains the monthly salary calculator (base pay plus
//! overtime premium projected over a month), the min/average/max
//! aggregation at subsidiary and global scope, and the pipeline that
//! chains them into a [`PayrollReport`](crate::models::PayrollReport).

mod pipeline;
mod salary;
mod statistics;

pub use pipeline::{ENGINE_VERSION, run_payroll};
pub use salary::{
    WageInputs, calculate_monthly_salaries, calculate_monthly_salaries_with,
    calculate_monthly_salary, monthly_pay, resolve_wage_inputs, truncate_salary,
};
pub use statistics::{compute_global_statistics, compute_subsidiary_statistics, salary_figures};
