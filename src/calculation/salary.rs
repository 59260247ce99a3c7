//! Monthly salary calculation.
//!
//! This module converts raw wage inputs into monthly salaries:
//!
//! - **No overtime** (`worked <= contract`): `worked × rate × weeks`
//! - **Overtime**: `(contract × rate + (worked − contract) × rate × multiplier) × weeks`
//!
//! The result is truncated toward zero. With the standard rules the
//! multiplier is 1.5 and a month is 4 weeks.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::config::{MissingFieldPolicy, PayrollRules};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    EmployeeSalary, MissingFieldWarning, RawEmployeeRecord, SalaryCalculation, SalaryMap,
    SubsidiaryRoster, WageField,
};

/// Wage inputs after validation and missing-field substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageInputs {
    /// Currency per hour.
    pub hourly_rate: Decimal,
    /// Hours actually worked in a week.
    pub weekly_hours_worked: Decimal,
    /// Contractually expected weekly hours.
    pub contract_hours: Decimal,
}

impl WageInputs {
    /// Hours worked beyond contract hours, or zero.
    pub fn overtime_hours(&self) -> Decimal {
        if self.weekly_hours_worked > self.contract_hours {
            self.weekly_hours_worked - self.contract_hours
        } else {
            Decimal::ZERO
        }
    }
}

/// Computes the untruncated monthly pay for validated inputs.
///
/// # Errors
///
/// Returns `CalculationError` if an intermediate product exceeds the
/// `Decimal` range.
///
/// # Examples
///
/// ```
/// use salary_stats::calculation::{WageInputs, monthly_pay};
/// use salary_stats::config::PayrollRules;
/// use rust_decimal::Decimal;
///
/// let inputs = WageInputs {
///     hourly_rate: Decimal::from(20),
///     weekly_hours_worked: Decimal::from(45),
///     contract_hours: Decimal::from(40),
/// };
/// // (40 × 20 + 5 × 20 × 1.5) × 4
/// assert_eq!(monthly_pay(&inputs, &PayrollRules::default()).unwrap(), Decimal::from(3800));
/// ```
pub fn monthly_pay(inputs: &WageInputs, rules: &PayrollRules) -> PayrollResult<Decimal> {
    let weeks = Decimal::from(rules.weeks_per_month);
    let overflow = || PayrollError::CalculationError {
        message: format!(
            "monthly pay overflows for rate {} and {} hours worked",
            inputs.hourly_rate, inputs.weekly_hours_worked
        ),
    };

    let weekly = if inputs.weekly_hours_worked <= inputs.contract_hours {
        inputs.weekly_hours_worked.checked_mul(inputs.hourly_rate)
    } else {
        let overtime_pay = inputs
            .overtime_hours()
            .checked_mul(inputs.hourly_rate)
            .and_then(|pay| pay.checked_mul(rules.overtime_multiplier));
        let contract_pay = inputs.contract_hours.checked_mul(inputs.hourly_rate);
        contract_pay
            .zip(overtime_pay)
            .and_then(|(contract, overtime)| contract.checked_add(overtime))
    };

    weekly
        .and_then(|pay| pay.checked_mul(weeks))
        .ok_or_else(overflow)
}

/// Truncates a monthly pay figure toward zero.
pub fn truncate_salary(pay: Decimal) -> PayrollResult<i64> {
    pay.trunc()
        .to_i64()
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("monthly salary {} does not fit in a 64-bit integer", pay),
        })
}

/// Validates one record and resolves its wage inputs.
///
/// Negative values are rejected. Missing values follow the rules' policy:
/// with [`MissingFieldPolicy::Warn`] they become zero and a warning is
/// pushed onto `warnings`.
pub fn resolve_wage_inputs(
    subsidiary: &str,
    position: usize,
    record: &RawEmployeeRecord,
    rules: &PayrollRules,
    warnings: &mut Vec<MissingFieldWarning>,
) -> PayrollResult<WageInputs> {
    let mut resolve = |field: WageField| -> PayrollResult<Decimal> {
        match record.field(field) {
            Some(value) if value.is_sign_negative() && !value.is_zero() => {
                Err(PayrollError::InvalidWageData {
                    subsidiary: subsidiary.to_string(),
                    employee: record.name.clone(),
                    field,
                    value,
                })
            }
            Some(value) => Ok(value),
            None => match rules.missing_fields {
                MissingFieldPolicy::Reject => Err(PayrollError::MissingWageData {
                    subsidiary: subsidiary.to_string(),
                    employee: record.name.clone(),
                    field,
                }),
                MissingFieldPolicy::Warn => {
                    warn!(
                        subsidiary = %subsidiary,
                        employee = %record.name,
                        position,
                        field = %field,
                        "Wage field missing, treating as zero"
                    );
                    warnings.push(MissingFieldWarning {
                        subsidiary: subsidiary.to_string(),
                        employee: record.name.clone(),
                        position,
                        field,
                    });
                    Ok(Decimal::ZERO)
                }
            },
        }
    };

    Ok(WageInputs {
        hourly_rate: resolve(WageField::HourlyRate)?,
        weekly_hours_worked: resolve(WageField::WeeklyHoursWorked)?,
        contract_hours: resolve(WageField::ContractHours)?,
    })
}

/// Calculates one employee's monthly salary.
///
/// Missing fields are handled per `rules.missing_fields`, but no warnings
/// are collected; use [`calculate_monthly_salaries_with`] for that.
///
/// # Examples
///
/// ```
/// use salary_stats::calculation::calculate_monthly_salary;
/// use salary_stats::config::PayrollRules;
/// use salary_stats::models::RawEmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let record = RawEmployeeRecord::new(
///     "Alice",
///     "Engineer",
///     Decimal::from(20),
///     Decimal::from(35),
///     Decimal::from(40),
/// );
/// let salary = calculate_monthly_salary("TechCorp", &record, &PayrollRules::default()).unwrap();
/// assert_eq!(salary, 2800);
/// ```
pub fn calculate_monthly_salary(
    subsidiary: &str,
    record: &RawEmployeeRecord,
    rules: &PayrollRules,
) -> PayrollResult<i64> {
    let mut ignored = Vec::new();
    let inputs = resolve_wage_inputs(subsidiary, 0, record, rules, &mut ignored)?;
    truncate_salary(monthly_pay(&inputs, rules)?)
}

/// Calculates monthly salaries for a whole roster with the standard rules.
///
/// See [`calculate_monthly_salaries_with`].
pub fn calculate_monthly_salaries(roster: &SubsidiaryRoster) -> PayrollResult<SalaryCalculation> {
    calculate_monthly_salaries_with(roster, &PayrollRules::default())
}

/// Calculates monthly salaries for a whole roster.
///
/// Produces one [`EmployeeSalary`] per record, grouped by subsidiary, with
/// subsidiary and employee order preserved. Subsidiaries with no employees
/// are kept (with an empty list). The roster is not modified.
///
/// # Errors
///
/// - `InvalidWageData` if any wage field is negative
/// - `MissingWageData` if a field is absent and the policy is `reject`
/// - `CalculationError` if a salary does not fit in an `i64`
pub fn calculate_monthly_salaries_with(
    roster: &SubsidiaryRoster,
    rules: &PayrollRules,
) -> PayrollResult<SalaryCalculation> {
    let mut salaries = SalaryMap::with_capacity(roster.len());
    let mut warnings = Vec::new();

    for (subsidiary, records) in roster.iter() {
        let mut employees = Vec::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let inputs = resolve_wage_inputs(subsidiary, position, record, rules, &mut warnings)?;
            let monthly_salary = truncate_salary(monthly_pay(&inputs, rules)?)?;

            debug!(
                subsidiary = %subsidiary,
                employee = %record.name,
                overtime_hours = %inputs.overtime_hours().normalize(),
                monthly_salary,
                "Calculated monthly salary"
            );

            employees.push(EmployeeSalary {
                name: record.name.clone(),
                job: record.job.clone(),
                monthly_salary,
            });
        }

        salaries.insert(subsidiary, employees);
    }

    Ok(SalaryCalculation { salaries, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(name: &str, rate: &str, worked: &str, contract: &str) -> RawEmployeeRecord {
        RawEmployeeRecord::new(name, "Engineer", dec(rate), dec(worked), dec(contract))
    }

    fn salary_of(rate: &str, worked: &str, contract: &str) -> i64 {
        calculate_monthly_salary(
            "TechCorp",
            &record("Alice", rate, worked, contract),
            &PayrollRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_no_overtime_under_contract() {
        // 35 × 20 × 4
        assert_eq!(salary_of("20", "35", "40"), 2800);
    }

    #[test]
    fn test_no_overtime_exactly_at_contract() {
        // 40 × 20 × 4
        assert_eq!(salary_of("20", "40", "40"), 3200);
    }

    #[test]
    fn test_overtime_beyond_contract() {
        // (40 × 20 + 5 × 20 × 1.5) × 4 = (800 + 150) × 4
        assert_eq!(salary_of("20", "45", "40"), 3800);
    }

    #[test]
    fn test_fractional_result_is_truncated_not_rounded() {
        // 10.5 × 10.10 × 4 = 424.2
        assert_eq!(salary_of("10.10", "10.5", "40"), 424);
        // 7.99 × 1 × 4 = 31.96
        assert_eq!(salary_of("1", "7.99", "40"), 31);
    }

    #[test]
    fn test_overtime_fractional_result_is_truncated() {
        // (35 × 17.33 + 2.5 × 17.33 × 1.5) × 4 = (606.55 + 64.9875) × 4 = 2686.15
        assert_eq!(salary_of("17.33", "37.5", "35"), 2686);
    }

    #[test]
    fn test_zero_contract_hours_makes_all_hours_overtime() {
        // 10 × 20 × 1.5 × 4
        assert_eq!(salary_of("20", "10", "0"), 1200);
    }

    #[test]
    fn test_zero_hours_gives_zero_salary() {
        assert_eq!(salary_of("25", "0", "40"), 0);
    }

    #[test]
    fn test_custom_rules_change_multiplier_and_weeks() {
        let rules = PayrollRules {
            overtime_multiplier: dec("2"),
            weeks_per_month: 5,
            ..PayrollRules::default()
        };
        // (40 × 10 + 2 × 10 × 2) × 5
        let salary =
            calculate_monthly_salary("TechCorp", &record("Bob", "10", "42", "40"), &rules).unwrap();
        assert_eq!(salary, 2200);
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result = calculate_monthly_salary(
            "TechCorp",
            &record("Alice", "-20", "35", "40"),
            &PayrollRules::default(),
        );
        match result {
            Err(PayrollError::InvalidWageData {
                subsidiary,
                employee,
                field,
                value,
            }) => {
                assert_eq!(subsidiary, "TechCorp");
                assert_eq!(employee, "Alice");
                assert_eq!(field, WageField::HourlyRate);
                assert_eq!(value, dec("-20"));
            }
            other => panic!("expected InvalidWageData, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let worked = calculate_monthly_salary(
            "TechCorp",
            &record("Alice", "20", "-1", "40"),
            &PayrollRules::default(),
        );
        assert!(matches!(
            worked,
            Err(PayrollError::InvalidWageData {
                field: WageField::WeeklyHoursWorked,
                ..
            })
        ));

        let contract = calculate_monthly_salary(
            "TechCorp",
            &record("Alice", "20", "35", "-40"),
            &PayrollRules::default(),
        );
        assert!(matches!(
            contract,
            Err(PayrollError::InvalidWageData {
                field: WageField::ContractHours,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        assert_eq!(salary_of("20", "-0", "40"), 0);
    }

    #[test]
    fn test_missing_fields_default_to_zero_with_warnings() {
        let mut roster = SubsidiaryRoster::new();
        roster.insert(
            "TechCorp",
            vec![
                record("Alice", "20", "35", "40"),
                RawEmployeeRecord {
                    name: "Bob".to_string(),
                    job: "Designer".to_string(),
                    hourly_rate: Some(dec("20")),
                    weekly_hours_worked: Some(dec("10")),
                    contract_hours: None,
                },
            ],
        );

        let calculation = calculate_monthly_salaries(&roster).unwrap();

        // Contract hours default to zero so every hour is overtime: 10 × 20 × 1.5 × 4
        let employees = calculation.salaries.get("TechCorp").unwrap();
        assert_eq!(employees[1].monthly_salary, 1200);

        assert_eq!(
            calculation.warnings,
            vec![MissingFieldWarning {
                subsidiary: "TechCorp".to_string(),
                employee: "Bob".to_string(),
                position: 1,
                field: WageField::ContractHours,
            }]
        );
    }

    #[test]
    fn test_all_fields_missing_gives_zero_and_three_warnings() {
        let mut roster = SubsidiaryRoster::new();
        roster.insert(
            "DesignWorks",
            vec![RawEmployeeRecord {
                name: "Ghost".to_string(),
                job: "Unknown".to_string(),
                hourly_rate: None,
                weekly_hours_worked: None,
                contract_hours: None,
            }],
        );

        let calculation = calculate_monthly_salaries(&roster).unwrap();
        assert_eq!(
            calculation.salaries.get("DesignWorks").unwrap()[0].monthly_salary,
            0
        );
        let fields: Vec<WageField> = calculation.warnings.iter().map(|w| w.field).collect();
        assert_eq!(fields, WageField::ALL.to_vec());
    }

    #[test]
    fn test_reject_policy_fails_on_missing_field() {
        let rules = PayrollRules {
            missing_fields: MissingFieldPolicy::Reject,
            ..PayrollRules::default()
        };
        let mut roster = SubsidiaryRoster::new();
        roster.insert(
            "ProjectLead",
            vec![RawEmployeeRecord {
                name: "Carol".to_string(),
                job: "Manager".to_string(),
                hourly_rate: None,
                weekly_hours_worked: Some(dec("40")),
                contract_hours: Some(dec("40")),
            }],
        );

        let result = calculate_monthly_salaries_with(&roster, &rules);
        assert!(matches!(
            result,
            Err(PayrollError::MissingWageData {
                field: WageField::HourlyRate,
                ..
            })
        ));
    }

    #[test]
    fn test_roster_order_and_names_preserved() {
        let mut roster = SubsidiaryRoster::new();
        roster.insert(
            "ProjectLead",
            vec![
                record("Zed", "30", "40", "40"),
                record("Amy", "10", "20", "40"),
            ],
        );
        roster.insert("Empty", vec![]);
        roster.insert("DesignWorks", vec![record("Max", "15", "38", "35")]);

        let calculation = calculate_monthly_salaries(&roster).unwrap();

        let names: Vec<&str> = calculation.salaries.names().collect();
        assert_eq!(names, vec!["ProjectLead", "Empty", "DesignWorks"]);

        let project_lead = calculation.salaries.get("ProjectLead").unwrap();
        assert_eq!(project_lead[0].name, "Zed");
        assert_eq!(project_lead[0].job, "Engineer");
        assert_eq!(project_lead[0].monthly_salary, 4800);
        assert_eq!(project_lead[1].name, "Amy");
        assert_eq!(project_lead[1].monthly_salary, 800);

        assert!(calculation.salaries.get("Empty").unwrap().is_empty());
        assert!(calculation.warnings.is_empty());
        assert_eq!(calculation.employee_count(), 3);
    }

    #[test]
    fn test_roster_is_not_modified() {
        let mut roster = SubsidiaryRoster::new();
        roster.insert("TechCorp", vec![record("Alice", "20", "45", "40")]);
        let before = roster.clone();

        calculate_monthly_salaries(&roster).unwrap();

        assert_eq!(roster, before);
    }

    #[test]
    fn test_empty_roster_gives_empty_map() {
        let calculation = calculate_monthly_salaries(&SubsidiaryRoster::new()).unwrap();
        assert!(calculation.salaries.is_empty());
        assert!(calculation.warnings.is_empty());
    }

    #[test]
    fn test_overflow_is_a_calculation_error() {
        let result = truncate_salary(Decimal::MAX);
        assert!(matches!(result, Err(PayrollError::CalculationError { .. })));
    }

    #[test]
    fn test_huge_rate_is_a_calculation_error() {
        let record = RawEmployeeRecord::new(
            "Whale",
            "Investor",
            dec("10000000000000000000000000000"),
            dec("100"),
            dec("40"),
        );

        let result = calculate_monthly_salary("TechCorp", &record, &PayrollRules::default());
        assert!(matches!(result, Err(PayrollError::CalculationError { .. })));
    }

    #[test]
    fn test_huge_rate_without_overtime_is_a_calculation_error() {
        let inputs = WageInputs {
            hourly_rate: Decimal::MAX,
            weekly_hours_worked: dec("2"),
            contract_hours: dec("40"),
        };
        assert!(matches!(
            monthly_pay(&inputs, &PayrollRules::default()),
            Err(PayrollError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_huge_rate_fails_whole_roster() {
        let mut roster = SubsidiaryRoster::new();
        roster.insert(
            "TechCorp",
            vec![
                record("Alice", "20", "35", "40"),
                RawEmployeeRecord::new("Whale", "Investor", Decimal::MAX, dec("41"), dec("40")),
            ],
        );

        let result = calculate_monthly_salaries(&roster);
        assert!(matches!(result, Err(PayrollError::CalculationError { .. })));
    }

    #[test]
    fn test_overtime_hours() {
        let inputs = WageInputs {
            hourly_rate: dec("20"),
            weekly_hours_worked: dec("45"),
            contract_hours: dec("40"),
        };
        assert_eq!(inputs.overtime_hours(), dec("5"));

        let under = WageInputs {
            weekly_hours_worked: dec("30"),
            ..inputs
        };
        assert_eq!(under.overtime_hours(), Decimal::ZERO);
    }
}
