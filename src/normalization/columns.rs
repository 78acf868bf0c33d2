//! Column canonicalization and schema resolution.
//!
//! Columns are addressed by canonical name through a [`ColumnMap`], never by
//! position, so arbitrary column orders and extra columns are accepted.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{ProvisionError, ProvisionResult};
use crate::models::columns::{self, REQUIRED_COLUMNS};
use crate::models::{EmployeeRecord, RawTable};

use super::coerce::{DecimalSeparator, coerce_numeric};

/// Canonicalizes a column name: strips a byte-order mark, trims and lower-cases.
///
/// # Examples
///
/// ```
/// use payroll_provisions::normalization::canonicalize_column;
///
/// assert_eq!(canonicalize_column("  Valor_Salario "), "valor_salario");
/// ```
pub fn canonicalize_column(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Maps canonical column names to their position in a table.
///
/// When two columns canonicalize to the same name, the first one wins.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    positions: HashMap<String, usize>,
    order: Vec<String>,
}

impl ColumnMap {
    /// Builds the map from a table header.
    pub fn from_columns(columns: &[String]) -> Self {
        let mut map = Self::default();
        for (index, raw_name) in columns.iter().enumerate() {
            let name = canonicalize_column(raw_name);
            if map.positions.contains_key(&name) {
                warn!(column = %name, position = index, "Ignoring duplicate column");
                continue;
            }
            map.positions.insert(name.clone(), index);
            map.order.push(name);
        }
        map
    }

    /// Returns the position of a canonical column name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Returns the names in `wanted` that are absent, preserving their order.
    pub fn missing(&self, wanted: &[&str]) -> Vec<String> {
        wanted
            .iter()
            .filter(|name| !self.positions.contains_key(**name))
            .map(|name| name.to_string())
            .collect()
    }

    /// Fails with [`ProvisionError::Schema`] listing every absent name.
    pub fn require(&self, wanted: &[&str]) -> ProvisionResult<()> {
        let missing = self.missing(wanted);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProvisionError::Schema { missing })
        }
    }

    fn position_of_required(&self, name: &str) -> ProvisionResult<usize> {
        self.position(name).ok_or_else(|| ProvisionError::Schema {
            missing: vec![name.to_string()],
        })
    }
}

/// Positions of the required columns plus the pass-through columns.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedColumns {
    code: usize,
    name: usize,
    section: usize,
    function: usize,
    salary: usize,
    meal_allowance: usize,
    insurance: usize,
    passthrough: Vec<(String, usize)>,
}

impl ResolvedColumns {
    /// Resolves the required schema against a column map.
    ///
    /// Columns that are neither required nor computed become pass-through;
    /// computed columns from a previous run are dropped since they are
    /// always recomputed.
    pub(crate) fn resolve(map: &ColumnMap) -> ProvisionResult<Self> {
        map.require(&REQUIRED_COLUMNS)?;

        let passthrough = map
            .order
            .iter()
            .filter(|name| !REQUIRED_COLUMNS.contains(&name.as_str()))
            .filter(|name| !columns::is_computed(name))
            .filter_map(|name| map.position(name).map(|index| (name.clone(), index)))
            .collect();

        Ok(Self {
            code: map.position_of_required(columns::EMPLOYEE_CODE)?,
            name: map.position_of_required(columns::EMPLOYEE_NAME)?,
            section: map.position_of_required(columns::SECTION)?,
            function: map.position_of_required(columns::FUNCTION)?,
            salary: map.position_of_required(columns::SALARY)?,
            meal_allowance: map.position_of_required(columns::MEAL_ALLOWANCE)?,
            insurance: map.position_of_required(columns::INSURANCE)?,
            passthrough,
        })
    }

    /// Reads one row into a record, or `None` when the salary is not numeric.
    pub(crate) fn read_row(
        &self,
        table: &RawTable,
        row: usize,
        separator: DecimalSeparator,
    ) -> Option<EmployeeRecord> {
        let salary = coerce_numeric(table.cell(row, self.salary), separator).value()?;

        let extra = self
            .passthrough
            .iter()
            .map(|(name, index)| (name.clone(), table.cell(row, *index).clone()))
            .collect();

        Some(EmployeeRecord {
            code: table.cell(row, self.code).to_text(),
            name: table.cell(row, self.name).to_text(),
            section: table.cell(row, self.section).to_text(),
            function: table.cell(row, self.function).to_text(),
            salary,
            meal_allowance: coerce_numeric(table.cell(row, self.meal_allowance), separator)
                .or_zero(),
            insurance: coerce_numeric(table.cell(row, self.insurance), separator).or_zero(),
            extra,
        })
    }
}
