//! CSV export of subsidiary statistics.
//!
//! The file has two sections separated by one blank line:
//!
//! 1. one row per employee (`Company, Employee Name, Job Title, Monthly Salary`)
//! 2. one row per subsidiary (`Company, Average, Highest, Lowest`)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::SubsidiaryStatisticsMap;

use super::format_amount;

/// Writes the two-section CSV to any writer.
///
/// Employees appear in calculator order. The average is rounded to two
/// decimal places.
pub fn write_csv<W: Write>(
    mut writer: W,
    statistics: &SubsidiaryStatisticsMap,
    currency: &str,
) -> PayrollResult<()> {
    write_csv_to(&mut writer, statistics, currency).map_err(|e| PayrollError::ExportError {
        path: "<writer>".to_string(),
        message: e.to_string(),
    })
}

/// Writes the two-section CSV to a file, replacing any existing content.
pub fn export_csv<P: AsRef<Path>>(
    path: P,
    statistics: &SubsidiaryStatisticsMap,
    currency: &str,
) -> PayrollResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let export_error = |message: String| PayrollError::ExportError {
        path: path_str.clone(),
        message,
    };

    let file = File::create(path).map_err(|e| export_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    write_csv_to(&mut writer, statistics, currency).map_err(|e| export_error(e.to_string()))?;
    writer.flush().map_err(|e| export_error(e.to_string()))?;

    info!(
        path = %path_str,
        subsidiaries = statistics.len(),
        "CSV export written"
    );
    Ok(())
}

fn write_csv_to<W: Write>(
    writer: &mut W,
    statistics: &SubsidiaryStatisticsMap,
    currency: &str,
) -> Result<(), csv::Error> {
    {
        let mut employees = csv_writer(&mut *writer);
        employees.write_record([
            "Company".to_string(),
            "Employee Name".to_string(),
            "Job Title".to_string(),
            format!("Monthly Salary ({})", currency),
        ])?;
        for (subsidiary, stats) in statistics.iter() {
            for employee in &stats.employee_salary {
                employees.write_record([
                    subsidiary,
                    employee.name.as_str(),
                    employee.job.as_str(),
                    employee.monthly_salary.to_string().as_str(),
                ])?;
            }
        }
        employees.flush()?;
    }

    writer.write_all(b"\n")?;

    let mut summary = csv_writer(&mut *writer);
    summary.write_record([
        "Company".to_string(),
        format!("Average Salary ({})", currency),
        format!("Highest Salary ({})", currency),
        format!("Lowest Salary ({})", currency),
    ])?;
    for (subsidiary, stats) in statistics.iter() {
        summary.write_record([
            subsidiary.to_string(),
            format_amount(stats.statistics.average_salary),
            stats.statistics.highest_salary.to_string(),
            stats.statistics.lowest_salary.to_string(),
        ])?;
    }
    summary.flush()?;
    Ok(())
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer)
}
