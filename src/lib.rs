//! Payroll provision engine
//!
//! This crate computes the monthly provisions an employer books for each
//! employee in an uploaded payroll spreadsheet: social charges, 13th-salary
//! and vacation accruals and the severance indemnity reserve, together with
//! each employee's monthly total cost and a batch summary.
//!
//! The pipeline runs one way: [`spreadsheet`] decodes the upload into a raw
//! table, [`normalization`] validates and coerces it into employee records,
//! [`calculation`] derives provisions and totals, and [`export`] renders the
//! result as CSV. [`api`] exposes the pipeline over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod normalization;
pub mod spreadsheet;
