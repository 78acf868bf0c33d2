//! Core data models for the payroll provision engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cell;
pub mod columns;
mod employee;
mod provision;
mod table;

pub use cell::{CellValue, RawValue};
pub use employee::EmployeeRecord;
pub use provision::{PayrollSummary, ProvisionBreakdown, ProvisionedRecord};
pub use table::RawTable;
