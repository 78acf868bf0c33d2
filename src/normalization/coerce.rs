//! Numeric coercion of raw cells.
//!
//! Coercion never fails: anything that is not a plain decimal number becomes
//! [`CellValue::Missing`], leaving the decision to drop or default the cell
//! to the caller.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::models::{CellValue, RawValue};

/// Plain or scientific decimal notation with a `.` separator.
static NUMERIC_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("numeric pattern is valid")
});

/// Largest magnitude accepted as a monetary amount.
///
/// Larger values coerce to `Missing` so that downstream arithmetic can never
/// overflow the decimal range.
pub const MAX_MONETARY_MAGNITUDE: Decimal =
    Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// The decimal separator used by numeric text in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalSeparator {
    /// `1234.56`, as in uploaded CSV and spreadsheet cells.
    #[default]
    Dot,
    /// `1234,56`, as written by the export.
    Comma,
}

/// Parses numeric text, returning `None` when it is not a number.
///
/// Surrounding whitespace is ignored. Thousands separators, currency
/// symbols, `inf` and `nan` are all rejected.
///
/// # Examples
///
/// ```
/// use payroll_provisions::normalization::{DecimalSeparator, parse_numeric_text};
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_numeric_text(" 5000.50 ", DecimalSeparator::Dot), Some(Decimal::new(500050, 2)));
/// assert_eq!(parse_numeric_text("5000,50", DecimalSeparator::Comma), Some(Decimal::new(500050, 2)));
/// assert_eq!(parse_numeric_text("abc", DecimalSeparator::Dot), None);
/// ```
pub fn parse_numeric_text(text: &str, separator: DecimalSeparator) -> Option<Decimal> {
    let trimmed = text.trim();

    let candidate = match separator {
        DecimalSeparator::Dot => trimmed.to_string(),
        DecimalSeparator::Comma => {
            if trimmed.contains('.') {
                return None;
            }
            trimmed.replace(',', ".")
        }
    };

    if !NUMERIC_TEXT.is_match(&candidate) {
        return None;
    }

    let unsigned = candidate.strip_prefix('+').unwrap_or(&candidate);
    if unsigned.contains(['e', 'E']) {
        Decimal::from_scientific(&unsigned.to_lowercase()).ok()
    } else {
        Decimal::from_str(unsigned).ok()
    }
}

/// Coerces a raw cell to a number.
///
/// Booleans are not salaries or benefits and coerce to `Missing`, as do
/// values beyond [`MAX_MONETARY_MAGNITUDE`].
pub fn coerce_numeric(value: &RawValue, separator: DecimalSeparator) -> CellValue {
    let number = match value {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(text) => parse_numeric_text(text, separator),
        RawValue::Empty | RawValue::Bool(_) => None,
    };

    match number {
        Some(n) if n.abs() <= MAX_MONETARY_MAGNITUDE => CellValue::Numeric(n),
        _ => CellValue::Missing,
    }
}
