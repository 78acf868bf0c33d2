//! Provision result models.
//!
//! This module contains the [`ProvisionBreakdown`] computed for each employee,
//! the [`ProvisionedRecord`] pairing a record with its breakdown, and the
//! batch-wide [`PayrollSummary`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// The provisions derived from one employee's salary.
///
/// Every field is already rounded to two decimal places.
///
/// # Example
///
/// ```
/// use payroll_provisions::models::ProvisionBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = ProvisionBreakdown {
///     social_charges: Decimal::from_str("1440.00").unwrap(),
///     thirteenth_salary: Decimal::from_str("536.67").unwrap(),
///     vacation: Decimal::from_str("715.56").unwrap(),
///     severance_indemnity: Decimal::from_str("250.00").unwrap(),
/// };
/// assert_eq!(breakdown.provisions_total(), Decimal::from_str("1502.23").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionBreakdown {
    /// Employer social charges on the salary.
    pub social_charges: Decimal,
    /// Monthly accrual of the 13th salary, charges included.
    pub thirteenth_salary: Decimal,
    /// Monthly accrual of vacation pay plus the one-third bonus, charges included.
    pub vacation: Decimal,
    /// Severance indemnity reserve.
    pub severance_indemnity: Decimal,
}

impl ProvisionBreakdown {
    /// Sum of the three provisions (13th salary, vacation, severance).
    ///
    /// Social charges are not a provision and are excluded.
    pub fn provisions_total(&self) -> Decimal {
        self.thirteenth_salary + self.vacation + self.severance_indemnity
    }

    /// Sum of all four fields.
    pub fn total(&self) -> Decimal {
        self.social_charges + self.provisions_total()
    }
}

/// An employee record with its computed provisions and monthly cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedRecord {
    /// The normalized input record.
    pub record: EmployeeRecord,
    /// The provisions derived from the salary.
    pub provisions: ProvisionBreakdown,
    /// Salary, benefits and provisions, rounded to two places.
    pub monthly_total: Decimal,
}

/// Aggregate totals over a batch of provisioned records.
///
/// Each total is the rounded sum of the per-row values shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of employees retained after normalization.
    pub employee_count: usize,
    /// Sum of base salaries.
    pub total_salaries: Decimal,
    /// Sum of meal allowances and insurance.
    pub total_benefits: Decimal,
    /// Sum of social charges.
    pub total_social_charges: Decimal,
    /// Sum of 13th-salary, vacation and severance provisions.
    pub total_provisions: Decimal,
    /// Sum of monthly total costs.
    pub total_monthly_cost: Decimal,
}
