//! End-to-end payroll processing.
//!
//! Ties the normalizer and the calculator together: a raw table goes in, the
//! computed rows and their summary come out.

use tracing::debug;

use crate::config::ProvisionRates;
use crate::error::ProvisionResult;
use crate::models::{EmployeeRecord, PayrollSummary, ProvisionedRecord, RawTable};
use crate::normalization::normalize;

use super::provisions::compute_provisions;
use super::row_total::compute_row_total;
use super::summary::compute_summary;

/// The outcome of processing one uploaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRun {
    /// Retained records with their provisions, in input order.
    pub records: Vec<ProvisionedRecord>,
    /// Totals over `records`.
    pub summary: PayrollSummary,
    /// Zero-based source rows dropped for lack of a numeric salary.
    pub skipped_rows: Vec<usize>,
}

/// Computes provisions and the monthly total for one record.
pub fn provision_record(record: EmployeeRecord, rates: &ProvisionRates) -> ProvisionedRecord {
    let provisions = compute_provisions(record.salary, rates);
    let monthly_total = compute_row_total(&record, &provisions);
    ProvisionedRecord {
        record,
        provisions,
        monthly_total,
    }
}

/// Normalizes a raw table, computes every row and aggregates the summary.
///
/// # Errors
///
/// Returns [`ProvisionError::Schema`](crate::error::ProvisionError::Schema)
/// when required columns are missing. Rows without a salary are skipped, not
/// reported as errors.
///
/// # Examples
///
/// ```
/// use payroll_provisions::calculation::process_payroll;
/// use payroll_provisions::config::ProvisionRates;
/// use payroll_provisions::spreadsheet::example_table;
///
/// let run = process_payroll(&example_table(), &ProvisionRates::default()).unwrap();
/// assert_eq!(run.summary.employee_count, 3);
/// assert_eq!(run.summary.total_monthly_cost.to_string(), "26420.90");
/// ```
pub fn process_payroll(raw: &RawTable, rates: &ProvisionRates) -> ProvisionResult<PayrollRun> {
    let normalized = normalize(raw)?;
    debug!(
        retained = normalized.records.len(),
        skipped = normalized.skipped_rows.len(),
        "Table normalized"
    );

    let records: Vec<ProvisionedRecord> = normalized
        .records
        .into_iter()
        .map(|record| provision_record(record, rates))
        .collect();
    let summary = compute_summary(&records);

    Ok(PayrollRun {
        records,
        summary,
        skipped_rows: normalized.skipped_rows,
    })
}
