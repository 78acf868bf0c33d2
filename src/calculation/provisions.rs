//! Provision calculation functionality.
//!
//! This module derives the monthly provisions an employer books for one
//! employee from the base salary alone.

use rust_decimal::Decimal;

use crate::config::ProvisionRates;
use crate::models::ProvisionBreakdown;

use super::rounding::round_currency;

/// Months over which annual entitlements are accrued.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Vacation pay carries a constitutional bonus of one third of salary.
const VACATION_BONUS_DIVISOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Computes the provisions for a salary.
///
/// With `r` the social charges rate:
/// - social charges: `salary × r`
/// - 13th salary: `(salary / 12) × (1 + r)`
/// - vacation: `((salary + salary / 3) / 12) × (1 + r)`
/// - severance indemnity: `salary × severance rate`
///
/// Each value is rounded to cents as it is computed.
///
/// # Examples
///
/// ```
/// use payroll_provisions::calculation::compute_provisions;
/// use payroll_provisions::config::ProvisionRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = compute_provisions(Decimal::from(5000), &ProvisionRates::default());
/// assert_eq!(breakdown.social_charges, Decimal::from_str("1440.00").unwrap());
/// assert_eq!(breakdown.thirteenth_salary, Decimal::from_str("536.67").unwrap());
/// assert_eq!(breakdown.vacation, Decimal::from_str("715.56").unwrap());
/// assert_eq!(breakdown.severance_indemnity, Decimal::from_str("250.00").unwrap());
/// ```
pub fn compute_provisions(salary: Decimal, rates: &ProvisionRates) -> ProvisionBreakdown {
    let charged = Decimal::ONE + rates.social_charges;
    let monthly_share = salary / MONTHS_PER_YEAR;
    let vacation_base = salary + salary / VACATION_BONUS_DIVISOR;

    ProvisionBreakdown {
        social_charges: round_currency(salary * rates.social_charges),
        thirteenth_salary: round_currency(monthly_share * charged),
        vacation: round_currency(vacation_base / MONTHS_PER_YEAR * charged),
        severance_indemnity: round_currency(salary * rates.severance),
    }
}
