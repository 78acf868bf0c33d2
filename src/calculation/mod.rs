//! Provision calculation.
//!
//! This module contains the per-employee provision formulas, the monthly
//! total cost per row, batch aggregation into a summary, and the pipeline
//! that runs an uploaded table through normalization and computation.

mod pipeline;
mod provisions;
mod rounding;
mod row_total;
mod summary;

pub use pipeline::{PayrollRun, process_payroll, provision_record};
pub use provisions::compute_provisions;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use row_total::compute_row_total;
pub use summary::compute_summary;
