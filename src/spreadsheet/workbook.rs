//! Workbook decoding.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::{ProvisionError, ProvisionResult};
use crate::models::{RawTable, RawValue};

/// Reads the first worksheet of an XLSX or XLS workbook.
///
/// The first row of the used range is the header. Numeric cells become
/// numbers, boolean cells booleans, empty cells [`RawValue::Empty`], and
/// anything else (dates, errors) its text rendering.
///
/// # Errors
///
/// Returns [`ProvisionError::Spreadsheet`] if the bytes are not a workbook
/// or the workbook has no worksheet.
pub fn read_workbook(bytes: &[u8]) -> ProvisionResult<RawTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|e| {
        ProvisionError::Spreadsheet {
            message: format!("Failed to open workbook: {}", e),
        }
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ProvisionError::Spreadsheet {
            message: "Workbook has no worksheets".to_string(),
        })?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| ProvisionError::Spreadsheet {
            message: format!("Failed to read sheet '{}': {}", sheet, e),
        })?;

    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header) => header.iter().map(header_text).collect(),
        None => Vec::new(),
    };
    let rows = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(RawTable::new(columns, rows))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => convert_cell(other).to_string(),
    }
}

fn convert_cell(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::from_text(s.as_str()),
        Data::Float(f) => RawValue::from_f64(*f),
        Data::Int(i) => RawValue::Number((*i).into()),
        Data::Bool(b) => RawValue::Bool(*b),
        other => RawValue::from_text(other.to_string()),
    }
}
