//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for every monetary output.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to cents, half away from zero.
///
/// The result always carries exactly two decimal places, so `1440` renders
/// as `1440.00`.
///
/// # Examples
///
/// ```
/// use payroll_provisions::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("0.005").unwrap()).to_string(), "0.01");
/// assert_eq!(round_currency(Decimal::from_str("536.6666").unwrap()).to_string(), "536.67");
/// assert_eq!(round_currency(Decimal::from(1440)).to_string(), "1440.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
