//! CSV export of computed payroll tables.
//!
//! The export targets spreadsheet software in a pt-BR locale: fields are
//! separated by `;` and numbers use `,` as the decimal separator. Columns are
//! the required columns, then pass-through columns in name order, then the
//! computed columns.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{ProvisionError, ProvisionResult};
use crate::models::columns::{self, COMPUTED_COLUMNS, REQUIRED_COLUMNS};
use crate::models::{ProvisionBreakdown, ProvisionedRecord, RawValue};
use crate::normalization::{
    ColumnMap, DecimalSeparator, ResolvedColumns, coerce_numeric, parse_numeric_text,
};
use crate::spreadsheet::read_delimited;

/// Field delimiter of the export.
pub const EXPORT_DELIMITER: u8 = b';';

/// Renders provisioned records as semicolon-separated text with a header row.
///
/// # Errors
///
/// Returns [`ProvisionError::NoData`] for an empty slice and
/// [`ProvisionError::Export`] if the text cannot be written.
///
/// # Examples
///
/// ```
/// use payroll_provisions::calculation::provision_record;
/// use payroll_provisions::config::ProvisionRates;
/// use payroll_provisions::export::export_csv;
/// use payroll_provisions::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let row = provision_record(EmployeeRecord::with_salary(Decimal::from(5000)), &ProvisionRates::default());
/// let csv = export_csv(&[row]).unwrap();
/// assert!(csv.starts_with("codigo_funcionario;nome_funcionario;"));
/// assert!(csv.contains(";1440,00;536,67;715,56;250,00;7942,23"));
/// ```
pub fn export_csv(records: &[ProvisionedRecord]) -> ProvisionResult<String> {
    if records.is_empty() {
        return Err(ProvisionError::NoData);
    }

    let extra_columns: BTreeSet<&str> = records
        .iter()
        .flat_map(|row| row.record.extra.keys().map(String::as_str))
        .collect();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(EXPORT_DELIMITER)
        .from_writer(Vec::new());

    let header = REQUIRED_COLUMNS
        .iter()
        .chain(extra_columns.iter())
        .chain(COMPUTED_COLUMNS.iter());
    writer.write_record(header).map_err(export_error)?;

    for row in records {
        let record = &row.record;
        let mut fields: Vec<String> = vec![
            record.code.clone().unwrap_or_default(),
            record.name.clone().unwrap_or_default(),
            record.section.clone().unwrap_or_default(),
            record.function.clone().unwrap_or_default(),
            format_decimal(record.salary),
            format_decimal(record.meal_allowance),
            format_decimal(record.insurance),
        ];
        fields.extend(
            extra_columns
                .iter()
                .map(|name| record.extra.get(*name).map(format_cell).unwrap_or_default()),
        );
        fields.extend([
            format_decimal(row.provisions.social_charges),
            format_decimal(row.provisions.thirteenth_salary),
            format_decimal(row.provisions.vacation),
            format_decimal(row.provisions.severance_indemnity),
            format_decimal(row.monthly_total),
        ]);
        writer.write_record(&fields).map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| ProvisionError::Export {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| ProvisionError::Export {
        message: e.to_string(),
    })
}

/// Reads an export produced by [`export_csv`] back into records.
///
/// Pass-through columns come back as text.
///
/// # Errors
///
/// Returns [`ProvisionError::Schema`] listing every required or computed
/// column that is absent, and [`ProvisionError::Export`] for a row whose
/// salary or computed values are not numbers.
pub fn import_csv(text: &str) -> ProvisionResult<Vec<ProvisionedRecord>> {
    let table = read_delimited(text.as_bytes(), EXPORT_DELIMITER)?;
    let map = ColumnMap::from_columns(&table.columns);

    let mut missing = map.missing(&REQUIRED_COLUMNS);
    missing.extend(map.missing(&COMPUTED_COLUMNS));
    if !missing.is_empty() {
        return Err(ProvisionError::Schema { missing });
    }

    let resolved = ResolvedColumns::resolve(&map)?;

    let mut records = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let record = resolved
            .read_row(&table, row, DecimalSeparator::Comma)
            .ok_or_else(|| ProvisionError::Export {
                message: format!("row {}: salary is not a number", row + 1),
            })?;

        let number = |name: &str| {
            map.position(name)
                .and_then(|index| {
                    coerce_numeric(table.cell(row, index), DecimalSeparator::Comma).value()
                })
                .ok_or_else(|| ProvisionError::Export {
                    message: format!("row {}: '{}' is not a number", row + 1, name),
                })
        };

        records.push(ProvisionedRecord {
            provisions: ProvisionBreakdown {
                social_charges: number(columns::SOCIAL_CHARGES)?,
                thirteenth_salary: number(columns::THIRTEENTH_SALARY)?,
                vacation: number(columns::VACATION)?,
                severance_indemnity: number(columns::SEVERANCE_INDEMNITY)?,
            },
            monthly_total: number(columns::MONTHLY_TOTAL)?,
            record,
        });
    }

    Ok(records)
}

/// Builds the download name of an export made at `at`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_provisions::export::export_filename;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(14, 7, 9).unwrap();
/// assert_eq!(export_filename(at), "provisao_folha_20240305_140709.csv");
/// ```
pub fn export_filename(at: NaiveDateTime) -> String {
    format!("provisao_folha_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

fn format_decimal(value: Decimal) -> String {
    value.to_string().replace('.', ",")
}

fn format_cell(value: &RawValue) -> String {
    match value {
        RawValue::Number(n) => format_decimal(n.normalize()),
        // Numbers that came back through JSON arrive as text.
        RawValue::Text(text) if text.contains('.') => {
            match parse_numeric_text(text, DecimalSeparator::Dot) {
                Some(n) => format_decimal(n.normalize()),
                None => text.clone(),
            }
        }
        other => other.to_string(),
    }
}

fn export_error(error: csv::Error) -> ProvisionError {
    ProvisionError::Export {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::process_payroll;
    use crate::config::ProvisionRates;
    use crate::models::{EmployeeRecord, RawTable};
    use crate::spreadsheet::example_table;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn example_records() -> Vec<ProvisionedRecord> {
        process_payroll(&example_table(), &ProvisionRates::default())
            .unwrap()
            .records
    }

    #[test]
    fn test_empty_export_is_rejected() {
        assert!(matches!(export_csv(&[]), Err(ProvisionError::NoData)));
    }

    #[test]
    fn test_header_and_first_row() {
        let csv = export_csv(&example_records()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "codigo_funcionario;nome_funcionario;secao;funcao;valor_salario;vale_alimentacao;\
             seguro;valor_encargos;provisao_13_salario;provisao_ferias;\
             provisao_indenizacao_5pc;custo_total_mensal"
        );
        assert_eq!(
            lines.next().unwrap(),
            "001;João Silva;TI;Desenvolvedor;5000,00;500,00;100,00;1440,00;536,67;715,56;250,00;8542,23"
        );
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_missing_values_are_empty_fields() {
        let row = crate::calculation::provision_record(
            EmployeeRecord::with_salary(dec("1000")),
            &ProvisionRates::default(),
        );
        let csv = export_csv(&[row]).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with(";;;;1000;0;0;"));
    }

    #[test]
    fn test_extra_columns_union_in_name_order() {
        let mut records = example_records();
        records[0]
            .record
            .extra
            .insert("matricula".to_string(), RawValue::Text("M-1".to_string()));
        records[2]
            .record
            .extra
            .insert("centro_custo".to_string(), RawValue::Number(dec("12.50")));

        let csv = export_csv(&records).unwrap();
        let header: Vec<&str> = csv.lines().next().unwrap().split(';').collect();
        assert_eq!(header[7], "centro_custo");
        assert_eq!(header[8], "matricula");
        assert_eq!(header[9], "valor_encargos");

        let first: Vec<&str> = csv.lines().nth(1).unwrap().split(';').collect();
        assert_eq!(first[7], "");
        assert_eq!(first[8], "M-1");
        let third: Vec<&str> = csv.lines().nth(3).unwrap().split(';').collect();
        assert_eq!(third[7], "12,5");
    }

    #[test]
    fn test_numeric_text_extras_use_comma_separator() {
        let mut records = example_records();
        let extra = &mut records[0].record.extra;
        extra.insert("centro_custo".to_string(), RawValue::Text("12.50".to_string()));
        extra.insert("matricula".to_string(), RawValue::Text("007".to_string()));
        extra.insert("versao".to_string(), RawValue::Text("v1.2".to_string()));

        let csv = export_csv(&records).unwrap();
        let first: Vec<&str> = csv.lines().nth(1).unwrap().split(';').collect();
        assert_eq!(&first[7..10], ["12,5", "007", "v1.2"]);
    }

    #[test]
    fn test_fields_containing_delimiter_are_quoted() {
        let mut records = example_records();
        records[0].record.name = Some("Silva; João".to_string());
        let csv = export_csv(&records).unwrap();
        assert!(csv.contains("\"Silva; João\""));
        assert_eq!(
            import_csv(&csv).unwrap()[0].record.name.as_deref(),
            Some("Silva; João")
        );
    }

    #[test]
    fn test_round_trip_reproduces_values() {
        let records = example_records();
        let imported = import_csv(&export_csv(&records).unwrap()).unwrap();
        assert_eq!(imported, records);
    }

    #[test]
    fn test_round_trip_turns_numeric_extras_into_text() {
        let mut records = example_records();
        records[0]
            .record
            .extra
            .insert("centro_custo".to_string(), RawValue::Number(dec("12.50")));
        let imported = import_csv(&export_csv(&records).unwrap()).unwrap();
        assert_eq!(
            imported[0].record.extra.get("centro_custo"),
            Some(&RawValue::Text("12,5".to_string()))
        );
    }

    #[test]
    fn test_import_requires_computed_columns() {
        let text = "codigo_funcionario;nome_funcionario;secao;funcao;valor_salario;\
                    vale_alimentacao;seguro;valor_encargos\n001;Ana;TI;Analista;1000;0;0;288\n";
        match import_csv(text) {
            Err(ProvisionError::Schema { missing }) => assert_eq!(
                missing,
                vec![
                    "provisao_13_salario",
                    "provisao_ferias",
                    "provisao_indenizacao_5pc",
                    "custo_total_mensal"
                ]
            ),
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_non_numeric_computed_value() {
        let records = example_records();
        let csv = export_csv(&records).unwrap().replacen("1440,00", "x", 1);
        assert!(matches!(import_csv(&csv), Err(ProvisionError::Export { .. })));
    }

    #[test]
    fn test_import_of_empty_text_reports_all_columns() {
        match import_csv("") {
            Err(ProvisionError::Schema { missing }) => assert_eq!(missing.len(), 12),
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_export_of_table_with_skipped_rows() {
        let mut table: RawTable = example_table();
        table.rows[1][4] = RawValue::from_text("n/a");
        let run = process_payroll(&table, &ProvisionRates::default()).unwrap();
        let csv = export_csv(&run.records).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(!csv.contains("Maria Santos"));
    }
}
