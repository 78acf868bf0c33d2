//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{ProvisionError, ProvisionResult};

use super::types::{AppConfig, ProvisionRates, UploadSettings};

/// Loads and provides access to the application configuration.
///
/// # File Layout
///
/// ```text
/// config/
/// └── provisions.yaml   # rates, upload and server sections
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_provisions::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/provisions.yaml").unwrap();
/// println!("Social charges rate: {}", loader.rates().social_charges);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A rate lies outside `0..=1` or no upload extension is allowed (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ProvisionResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ProvisionError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml(content: &str, origin: &str) -> ProvisionResult<Self> {
        let mut config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| ProvisionError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        validate_rates(&config.rates, origin)?;
        normalize_upload(&mut config.upload, origin)?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the provision rates.
    pub fn rates(&self) -> ProvisionRates {
        self.config.rates
    }

    /// Returns the upload settings.
    pub fn upload(&self) -> &UploadSettings {
        &self.config.upload
    }
}

fn validate_rates(rates: &ProvisionRates, origin: &str) -> ProvisionResult<()> {
    for (name, value) in [
        ("social_charges", rates.social_charges),
        ("severance", rates.severance),
    ] {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ProvisionError::ConfigParseError {
                path: origin.to_string(),
                message: format!("rate '{}' must be between 0 and 1, got {}", name, value),
            });
        }
    }
    Ok(())
}

fn normalize_upload(upload: &mut UploadSettings, origin: &str) -> ProvisionResult<()> {
    upload.allowed_extensions = upload
        .allowed_extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();

    if upload.allowed_extensions.is_empty() {
        return Err(ProvisionError::ConfigParseError {
            path: origin.to_string(),
            message: "upload.allowed_extensions must not be empty".to_string(),
        });
    }
    Ok(())
}
