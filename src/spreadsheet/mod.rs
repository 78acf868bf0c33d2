//! Spreadsheet decoding and the example workbook.
//!
//! Uploads arrive as raw bytes plus a file name; the extension selects the
//! decoder, and every decoder produces the same [`RawTable`].

mod csv_reader;
mod format;
mod template;
mod workbook;

use tracing::debug;

use crate::error::ProvisionResult;
use crate::models::RawTable;

pub use csv_reader::{read_csv, read_delimited};
pub use format::UploadFormat;
pub use template::{EXAMPLE_FILENAME, EXAMPLE_SHEET_NAME, example_table, example_workbook};
pub use workbook::read_workbook;

/// Decodes an uploaded file into a raw table.
///
/// # Errors
///
/// Returns [`ProvisionError::UnsupportedFileType`] for disallowed extensions
/// and [`ProvisionError::Spreadsheet`] when the bytes cannot be decoded.
///
/// [`ProvisionError::UnsupportedFileType`]: crate::error::ProvisionError::UnsupportedFileType
/// [`ProvisionError::Spreadsheet`]: crate::error::ProvisionError::Spreadsheet
pub fn read_upload(filename: &str, bytes: &[u8], allowed: &[String]) -> ProvisionResult<RawTable> {
    let format = UploadFormat::from_filename(filename, allowed)?;
    debug!(filename, ?format, size = bytes.len(), "Decoding upload");

    match format {
        UploadFormat::Csv => read_csv(bytes),
        UploadFormat::Xlsx | UploadFormat::Xls => read_workbook(bytes),
    }
}
