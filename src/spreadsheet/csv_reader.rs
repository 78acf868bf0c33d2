//! Delimited text decoding.

use crate::error::ProvisionResult;
use crate::models::{RawTable, RawValue};

/// Reads delimited text into a [`RawTable`].
///
/// The first record is the header. Records may have fewer or more fields
/// than the header. Invalid UTF-8 is replaced rather than rejected, so files
/// saved in a legacy encoding still load. Blank fields become
/// [`RawValue::Empty`]; every other field is kept as text.
///
/// # Examples
///
/// ```
/// use payroll_provisions::models::RawValue;
/// use payroll_provisions::spreadsheet::read_delimited;
///
/// let table = read_delimited(b"secao,valor_salario\nTI,5000\nRH,\n", b',').unwrap();
/// assert_eq!(table.columns, vec!["secao", "valor_salario"]);
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.cell(1, 1), &RawValue::Empty);
/// ```
pub fn read_delimited(bytes: &[u8], delimiter: u8) -> ProvisionResult<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns = reader
        .byte_headers()?
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect();

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| RawValue::from_text(String::from_utf8_lossy(field)))
                .collect(),
        );
    }

    Ok(RawTable::new(columns, rows))
}

/// Reads a comma-separated upload.
pub fn read_csv(bytes: &[u8]) -> ProvisionResult<RawTable> {
    read_delimited(bytes, b',')
}
