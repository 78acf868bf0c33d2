//! Request types for the payroll provisions API.
//!
//! This module defines the JSON row shape shared by the upload response and
//! the `/api/export` request body.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::models::{EmployeeRecord, ProvisionBreakdown, ProvisionedRecord, RawValue};

/// Request body for the `/api/export` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Previously computed rows, as returned by `/api/upload`.
    #[serde(default)]
    pub data: Vec<RecordRow>,
}

/// One computed payroll row as exchanged over JSON.
///
/// Field names follow the spreadsheet columns. Missing descriptive values are
/// `null`; pass-through columns are flattened alongside the named fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    /// Employee code.
    #[serde(rename = "codigo_funcionario", default, deserialize_with = "scalar_text")]
    pub code: Option<String>,
    /// Display name.
    #[serde(rename = "nome_funcionario", default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    /// Organizational section.
    #[serde(rename = "secao", default, deserialize_with = "scalar_text")]
    pub section: Option<String>,
    /// Job function.
    #[serde(rename = "funcao", default, deserialize_with = "scalar_text")]
    pub function: Option<String>,
    /// Base monthly salary.
    #[serde(rename = "valor_salario")]
    pub salary: Decimal,
    /// Meal allowance.
    #[serde(rename = "vale_alimentacao", default)]
    pub meal_allowance: Decimal,
    /// Insurance benefit.
    #[serde(rename = "seguro", default)]
    pub insurance: Decimal,
    /// Employer social charges.
    #[serde(rename = "valor_encargos")]
    pub social_charges: Decimal,
    /// 13th-salary provision.
    #[serde(rename = "provisao_13_salario")]
    pub thirteenth_salary: Decimal,
    /// Vacation provision.
    #[serde(rename = "provisao_ferias")]
    pub vacation: Decimal,
    /// Severance indemnity provision.
    #[serde(rename = "provisao_indenizacao_5pc")]
    pub severance_indemnity: Decimal,
    /// Monthly total cost.
    #[serde(rename = "custo_total_mensal")]
    pub monthly_total: Decimal,
    /// Pass-through columns.
    #[serde(flatten)]
    pub extra: BTreeMap<String, RawValue>,
}

/// Accepts any JSON scalar for a descriptive field and keeps its text.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawValue::deserialize(deserializer)?.to_text())
}

impl From<ProvisionedRecord> for RecordRow {
    fn from(row: ProvisionedRecord) -> Self {
        let ProvisionedRecord {
            record,
            provisions,
            monthly_total,
        } = row;
        RecordRow {
            code: record.code,
            name: record.name,
            section: record.section,
            function: record.function,
            salary: record.salary,
            meal_allowance: record.meal_allowance,
            insurance: record.insurance,
            social_charges: provisions.social_charges,
            thirteenth_salary: provisions.thirteenth_salary,
            vacation: provisions.vacation,
            severance_indemnity: provisions.severance_indemnity,
            monthly_total,
            extra: record.extra,
        }
    }
}

impl From<RecordRow> for ProvisionedRecord {
    fn from(row: RecordRow) -> Self {
        ProvisionedRecord {
            record: EmployeeRecord {
                code: row.code,
                name: row.name,
                section: row.section,
                function: row.function,
                salary: row.salary,
                meal_allowance: row.meal_allowance,
                insurance: row.insurance,
                extra: row.extra,
            },
            provisions: ProvisionBreakdown {
                social_charges: row.social_charges,
                thirteenth_salary: row.thirteenth_salary,
                vacation: row.vacation,
                severance_indemnity: row.severance_indemnity,
            },
            monthly_total: row.monthly_total,
        }
    }
}
