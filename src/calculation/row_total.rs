//! Monthly total cost per employee.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, ProvisionBreakdown};

use super::rounding::round_currency;

/// Computes the employer's monthly total cost for one employee.
///
/// Adds salary, meal allowance, insurance and the four already-rounded
/// provision values, then rounds the sum to cents.
///
/// # Examples
///
/// ```
/// use payroll_provisions::calculation::{compute_provisions, compute_row_total};
/// use payroll_provisions::config::ProvisionRates;
/// use payroll_provisions::models::EmployeeRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut record = EmployeeRecord::with_salary(Decimal::from(5000));
/// record.meal_allowance = Decimal::from(500);
/// record.insurance = Decimal::from(100);
///
/// let breakdown = compute_provisions(record.salary, &ProvisionRates::default());
/// assert_eq!(
///     compute_row_total(&record, &breakdown),
///     Decimal::from_str("8542.23").unwrap()
/// );
/// ```
pub fn compute_row_total(record: &EmployeeRecord, breakdown: &ProvisionBreakdown) -> Decimal {
    round_currency(record.salary + record.benefits() + breakdown.total())
}
