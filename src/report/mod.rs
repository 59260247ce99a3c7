//! Presentation adapters for salary statistics.
//!
//! Renders [`SubsidiaryStatisticsMap`](crate::models::SubsidiaryStatisticsMap)
//! as a console report or a CSV export. Sorting by salary happens here, not
//! in the aggregation.

mod console;
mod csv;

pub use self::console::{write_global_statistics, write_statistics};
pub use self::csv::{export_csv, write_csv};

use rust_decimal::Decimal;

/// Formats an amount with exactly two decimal places.
///
/// ```
/// use salary_stats::report::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(3300)), "3300.00");
/// assert_eq!(format_amount(Decimal::new(1000335, 3)), "1000.34");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}
