//! Upload format detection.

use crate::error::{ProvisionError, ProvisionResult};

/// The table formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    /// Comma-separated text.
    Csv,
    /// Office Open XML workbook.
    Xlsx,
    /// Legacy BIFF workbook.
    Xls,
}

impl UploadFormat {
    /// Detects the format from a file name's extension.
    ///
    /// The extension is everything after the last `.`, compared
    /// case-insensitively, and must be listed in `allowed`.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::UnsupportedFileType`] when the name has no
    /// extension, the extension is not allowed, or it names no known format.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_provisions::spreadsheet::UploadFormat;
    ///
    /// let allowed = vec!["csv".to_string(), "xlsx".to_string()];
    /// assert_eq!(UploadFormat::from_filename("Folha.XLSX", &allowed).unwrap(), UploadFormat::Xlsx);
    /// assert!(UploadFormat::from_filename("folha.xls", &allowed).is_err());
    /// assert!(UploadFormat::from_filename("folha", &allowed).is_err());
    /// ```
    pub fn from_filename(filename: &str, allowed: &[String]) -> ProvisionResult<Self> {
        let unsupported = || ProvisionError::UnsupportedFileType {
            filename: filename.to_string(),
            allowed: allowed.to_vec(),
        };

        let (_, extension) = filename.rsplit_once('.').ok_or_else(unsupported)?;
        let extension = extension.to_ascii_lowercase();
        if !allowed.iter().any(|a| a.eq_ignore_ascii_case(&extension)) {
            return Err(unsupported());
        }

        match extension.as_str() {
            "csv" => Ok(UploadFormat::Csv),
            "xlsx" => Ok(UploadFormat::Xlsx),
            "xls" => Ok(UploadFormat::Xls),
            _ => Err(unsupported()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_allowed() -> Vec<String> {
        vec!["csv".to_string(), "xlsx".to_string(), "xls".to_string()]
    }

    #[test]
    fn test_known_extensions() {
        let allowed = all_allowed();
        assert_eq!(UploadFormat::from_filename("a.csv", &allowed).unwrap(), UploadFormat::Csv);
        assert_eq!(UploadFormat::from_filename("a.xlsx", &allowed).unwrap(), UploadFormat::Xlsx);
        assert_eq!(UploadFormat::from_filename("a.XLS", &allowed).unwrap(), UploadFormat::Xls);
    }

    #[test]
    fn test_only_last_extension_counts() {
        let allowed = all_allowed();
        assert_eq!(
            UploadFormat::from_filename("folha.2024.csv", &allowed).unwrap(),
            UploadFormat::Csv
        );
        assert!(UploadFormat::from_filename("folha.csv.pdf", &allowed).is_err());
    }

    #[test]
    fn test_rejection_carries_filename_and_allowed_list() {
        match UploadFormat::from_filename("notas.txt", &all_allowed()) {
            Err(ProvisionError::UnsupportedFileType { filename, allowed }) => {
                assert_eq!(filename, "notas.txt");
                assert_eq!(allowed, all_allowed());
            }
            other => panic!("Expected UnsupportedFileType, got {:?}", other),
        }
    }

    #[test]
    fn test_allowed_but_unknown_extension_is_rejected() {
        let allowed = vec!["ods".to_string()];
        assert!(UploadFormat::from_filename("folha.ods", &allowed).is_err());
    }

    #[test]
    fn test_trailing_dot_is_rejected() {
        assert!(UploadFormat::from_filename("folha.", &all_allowed()).is_err());
    }
}
