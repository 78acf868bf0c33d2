//! Configuration loading and management for the payroll provision engine.
//!
//! Provision rates are injected into the calculator from here; upload and
//! server settings are consumed only by the HTTP layer.
//!
//! # Example
//!
//! ```no_run
//! use payroll_provisions::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/provisions.yaml").unwrap();
//! println!("ENCARGO_RATE: {}", config.rates().social_charges);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_SEVERANCE_RATE, DEFAULT_SOCIAL_CHARGES_RATE,
    ProvisionRates, ServerSettings, UploadSettings,
};
