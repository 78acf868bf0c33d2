//! Raw tabular input.

use super::RawValue;

static EMPTY_CELL: RawValue = RawValue::Empty;

/// A table as decoded from an upload: column names plus rows of cells.
///
/// Column names are kept exactly as they appear in the file; the normalizer
/// canonicalizes them. Rows may be shorter than the header, in which case
/// the trailing cells read as empty.
///
/// # Example
///
/// ```
/// use payroll_provisions::models::{RawTable, RawValue};
///
/// let table = RawTable::new(
///     vec!["Secao".to_string(), "Valor_Salario".to_string()],
///     vec![vec![RawValue::from_text("TI")]],
/// );
/// assert_eq!(table.cell(0, 0), &RawValue::Text("TI".to_string()));
/// assert!(table.cell(0, 1).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names, as read.
    pub columns: Vec<String>,
    /// Data rows; cell `i` belongs to `columns[i]`.
    pub rows: Vec<Vec<RawValue>>,
}

impl RawTable {
    /// Creates a table from its header and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<RawValue>>) -> Self {
        Self { columns, rows }
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cell at `row`/`column`, or an empty cell when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &RawValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY_CELL)
    }
}
