//! Example payroll table and its workbook rendering.

use std::io::Cursor;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use umya_spreadsheet::{new_file_empty_worksheet, writer};

use crate::error::{ProvisionError, ProvisionResult};
use crate::models::columns::REQUIRED_COLUMNS;
use crate::models::{RawTable, RawValue};

/// Name of the worksheet in the example workbook.
pub const EXAMPLE_SHEET_NAME: &str = "Folha de Pagamento";

/// File name offered for the example workbook download.
pub const EXAMPLE_FILENAME: &str = "folha_exemplo.xlsx";

const EXAMPLE_ROWS: [(&str, &str, &str, &str, i64); 3] = [
    ("001", "João Silva", "TI", "Desenvolvedor", 500_000),
    ("002", "Maria Santos", "RH", "Gerente", 600_000),
    ("003", "Pedro Oliveira", "Financeiro", "Analista", 450_000),
];

const EXAMPLE_MEAL_ALLOWANCE_CENTS: i64 = 50_000;
const EXAMPLE_INSURANCE_CENTS: i64 = 10_000;

/// Returns the three-row sample table in the required schema.
///
/// # Examples
///
/// ```
/// use payroll_provisions::spreadsheet::example_table;
///
/// let table = example_table();
/// assert_eq!(table.row_count(), 3);
/// assert_eq!(table.columns[0], "codigo_funcionario");
/// ```
pub fn example_table() -> RawTable {
    let rows = EXAMPLE_ROWS
        .iter()
        .map(|&(code, name, section, function, salary_cents)| {
            vec![
                RawValue::Text(code.to_string()),
                RawValue::Text(name.to_string()),
                RawValue::Text(section.to_string()),
                RawValue::Text(function.to_string()),
                RawValue::Number(Decimal::new(salary_cents, 2)),
                RawValue::Number(Decimal::new(EXAMPLE_MEAL_ALLOWANCE_CENTS, 2)),
                RawValue::Number(Decimal::new(EXAMPLE_INSURANCE_CENTS, 2)),
            ]
        })
        .collect();

    RawTable::new(REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(), rows)
}

/// Renders [`example_table`] as an XLSX workbook.
///
/// Text cells are written as strings, so employee codes keep their leading
/// zeros; monetary cells are written as numbers.
///
/// # Errors
///
/// Returns [`ProvisionError::Spreadsheet`] if the workbook cannot be built
/// or serialized.
pub fn example_workbook() -> ProvisionResult<Vec<u8>> {
    let table = example_table();
    let mut book = new_file_empty_worksheet();
    let sheet = book
        .new_sheet(EXAMPLE_SHEET_NAME)
        .map_err(|e| ProvisionError::Spreadsheet {
            message: format!("Failed to create sheet '{}': {}", EXAMPLE_SHEET_NAME, e),
        })?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        let col_num = (col_idx + 1) as u32;
        sheet.get_cell_mut((col_num, 1)).set_value_string(header.as_str());
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = (row_idx + 2) as u32;
        for (col_idx, value) in row.iter().enumerate() {
            let col_num = (col_idx + 1) as u32;
            let cell = sheet.get_cell_mut((col_num, row_num));
            match value {
                RawValue::Number(n) => {
                    cell.set_value_number(n.to_f64().unwrap_or_default());
                }
                RawValue::Empty => {}
                other => {
                    cell.set_value_string(other.to_string());
                }
            }
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    writer::xlsx::write_writer(&book, &mut buffer).map_err(|e| ProvisionError::Spreadsheet {
        message: format!("Failed to write workbook: {}", e),
    })?;

    Ok(buffer.into_inner())
}
