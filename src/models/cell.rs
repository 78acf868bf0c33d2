//! Cell values.
//!
//! [`RawValue`] is what the spreadsheet decoders produce; [`CellValue`] is the
//! result of numeric coercion, where anything unparseable is `Missing`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single cell as read from an uploaded table.
///
/// Serializes untagged: `Empty` as `null`, `Bool` as a boolean, `Text` and
/// `Number` as strings.
///
/// # Example
///
/// ```
/// use payroll_provisions::models::RawValue;
///
/// assert_eq!(RawValue::from_text("  "), RawValue::Empty);
/// assert_eq!(RawValue::from_text("TI"), RawValue::Text("TI".to_string()));
/// assert_eq!(RawValue::from_f64(5000.0).to_text().as_deref(), Some("5000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// No value in the cell.
    Empty,
    /// A boolean cell.
    Bool(bool),
    /// A text cell, kept exactly as read.
    Text(String),
    /// A numeric cell.
    Number(Decimal),
}

impl RawValue {
    /// Builds a cell from text; blank text is `Empty`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            RawValue::Empty
        } else {
            RawValue::Text(text)
        }
    }

    /// Builds a cell from a spreadsheet float.
    ///
    /// NaN is `Empty`. Values outside the decimal range are kept as text so
    /// that coercion later reports them as missing.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return RawValue::Empty;
        }
        let text = value.to_string();
        match Decimal::from_str(&text) {
            Ok(number) => RawValue::Number(number),
            Err(_) => RawValue::Text(text),
        }
    }

    /// Returns true if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, RawValue::Empty)
    }

    /// Renders the cell as text, `None` when empty.
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawValue::Empty => None,
            RawValue::Bool(b) => Some(b.to_string()),
            RawValue::Text(s) => Some(s.clone()),
            RawValue::Number(n) => Some(n.normalize().to_string()),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

/// A cell after numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    /// The cell parsed as a number.
    Numeric(Decimal),
    /// The cell was empty or not a number.
    Missing,
}

impl CellValue {
    /// Returns the numeric value, if any.
    pub fn value(self) -> Option<Decimal> {
        match self {
            CellValue::Numeric(n) => Some(n),
            CellValue::Missing => None,
        }
    }

    /// Returns the numeric value, or zero when missing.
    pub fn or_zero(self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }
}
