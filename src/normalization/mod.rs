//! Table normalization.
//!
//! Turns an arbitrary uploaded table into employee records:
//! 1. column names are canonicalized (trimmed, lower-cased);
//! 2. the required schema is checked, failing with every missing column;
//! 3. salary and benefit cells are coerced to numbers;
//! 4. rows without a numeric salary are dropped;
//! 5. missing benefits default to zero.
//!
//! The input table is only read, never modified.

mod coerce;
mod columns;

use tracing::debug;

use crate::error::ProvisionResult;
use crate::models::{EmployeeRecord, RawTable};

pub use coerce::{DecimalSeparator, MAX_MONETARY_MAGNITUDE, coerce_numeric, parse_numeric_text};
pub use columns::{ColumnMap, canonicalize_column};
pub(crate) use columns::ResolvedColumns;

/// The normalizer's output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    /// Retained records, densely indexed from zero.
    pub records: Vec<EmployeeRecord>,
    /// Zero-based source row indices that were dropped for lack of a salary.
    pub skipped_rows: Vec<usize>,
}

/// Normalizes an uploaded table using `.` as the decimal separator.
///
/// # Errors
///
/// Returns [`ProvisionError::Schema`](crate::error::ProvisionError::Schema)
/// listing every required column absent from the table.
///
/// # Examples
///
/// ```
/// use payroll_provisions::models::{RawTable, RawValue};
/// use payroll_provisions::normalization::normalize;
///
/// let header = ["codigo_funcionario", "nome_funcionario", "secao", "funcao",
///               "valor_salario", "vale_alimentacao", "seguro"];
/// let row = ["001", "Ana", "TI", "Analista", "abc", "500", "100"];
/// let table = RawTable::new(
///     header.iter().map(|h| h.to_string()).collect(),
///     vec![row.iter().map(|v| RawValue::from_text(*v)).collect()],
/// );
///
/// let normalized = normalize(&table).unwrap();
/// assert!(normalized.records.is_empty());
/// assert_eq!(normalized.skipped_rows, vec![0]);
/// ```
pub fn normalize(table: &RawTable) -> ProvisionResult<NormalizedTable> {
    normalize_with(table, DecimalSeparator::Dot)
}

/// Normalizes a table whose numeric text uses the given decimal separator.
pub fn normalize_with(
    table: &RawTable,
    separator: DecimalSeparator,
) -> ProvisionResult<NormalizedTable> {
    let map = ColumnMap::from_columns(&table.columns);
    let resolved = ResolvedColumns::resolve(&map)?;

    let mut normalized = NormalizedTable::default();
    for row in 0..table.row_count() {
        match resolved.read_row(table, row, separator) {
            Some(record) => normalized.records.push(record),
            None => {
                debug!(row, "Skipping row without a numeric salary");
                normalized.skipped_rows.push(row);
            }
        }
    }

    Ok(normalized)
}
