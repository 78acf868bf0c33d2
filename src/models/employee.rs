//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct, one normalized row of
//! an uploaded payroll table.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::RawValue;

/// Represents an employee whose provisions are computed.
///
/// Only `salary` is mandatory; benefit fields default to zero and the
/// descriptive fields may be absent in the source cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Employee code (`codigo_funcionario`).
    pub code: Option<String>,
    /// Display name (`nome_funcionario`).
    pub name: Option<String>,
    /// Organizational section (`secao`).
    pub section: Option<String>,
    /// Job function (`funcao`).
    pub function: Option<String>,
    /// Base monthly salary (`valor_salario`).
    pub salary: Decimal,
    /// Meal allowance (`vale_alimentacao`).
    pub meal_allowance: Decimal,
    /// Insurance benefit (`seguro`).
    pub insurance: Decimal,
    /// Non-required columns carried through, keyed by canonical name.
    pub extra: BTreeMap<String, RawValue>,
}

impl EmployeeRecord {
    /// Creates a record with the given salary and no other data.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_provisions::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord::with_salary(Decimal::new(500000, 2));
    /// assert_eq!(record.benefits(), Decimal::ZERO);
    /// assert!(record.code.is_none());
    /// ```
    pub fn with_salary(salary: Decimal) -> Self {
        Self {
            code: None,
            name: None,
            section: None,
            function: None,
            salary,
            meal_allowance: Decimal::ZERO,
            insurance: Decimal::ZERO,
            extra: BTreeMap::new(),
        }
    }

    /// Returns meal allowance plus insurance.
    pub fn benefits(&self) -> Decimal {
        self.meal_allowance + self.insurance
    }
}
