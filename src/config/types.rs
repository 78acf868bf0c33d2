//! Configuration types for the payroll provision engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Combined statutory employer charges applied to salary (28.8%).
pub const DEFAULT_SOCIAL_CHARGES_RATE: Decimal = Decimal::from_parts(288, 0, 0, false, 3);

/// Share of salary reserved for severance indemnity (5%).
pub const DEFAULT_SEVERANCE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Default cap on upload bodies (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Rates injected into the provision calculator.
///
/// Keeping the rates out of the calculation code lets a rate change ship as
/// a configuration edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProvisionRates {
    /// Employer social charges as a fraction of salary (ENCARGO_RATE).
    pub social_charges: Decimal,
    /// Severance indemnity reserve as a fraction of salary.
    pub severance: Decimal,
}

impl Default for ProvisionRates {
    fn default() -> Self {
        Self {
            social_charges: DEFAULT_SOCIAL_CHARGES_RATE,
            severance: DEFAULT_SEVERANCE_RATE,
        }
    }
}

/// Upload gatekeeping settings consumed by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadSettings {
    /// Lower-case file extensions accepted for upload.
    pub allowed_extensions: Vec<String>,
    /// Maximum accepted request body, in bytes.
    pub max_bytes: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["csv".to_string(), "xlsx".to_string(), "xls".to_string()],
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Network settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Socket address the server binds to.
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// The complete application configuration.
///
/// Every section is optional in the YAML file; absent sections fall back to
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Provision rates.
    #[serde(default)]
    pub rates: ProvisionRates,
    /// Upload settings.
    #[serde(default)]
    pub upload: UploadSettings,
    /// Server settings.
    #[serde(default)]
    pub server: ServerSettings,
}
