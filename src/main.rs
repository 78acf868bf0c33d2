//! Payroll provisions HTTP server.
//!
//! Reads the configuration from `PROVISIONS_CONFIG` (default
//! `./config/provisions.yaml`) and serves the API on the configured address.

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use payroll_provisions::api::{AppState, create_router};
use payroll_provisions::config::ConfigLoader;
use payroll_provisions::error::ProvisionError;

const CONFIG_ENV: &str = "PROVISIONS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/provisions.yaml";
const DEFAULT_LOG_FILTER: &str = "payroll_provisions=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match ConfigLoader::load(&config_path) {
        Ok(config) => config,
        Err(ProvisionError::ConfigNotFound { path }) => {
            warn!(path = %path, "Configuration file not found, using defaults");
            ConfigLoader::default()
        }
        Err(err) => {
            error!(error = %err, "Invalid configuration");
            return Err(err.into());
        }
    };

    let rates = config.rates();
    let bind_address = config.config().server.bind_address.clone();
    info!(
        social_charges_rate = %rates.social_charges,
        severance_rate = %rates.severance,
        max_upload_bytes = config.upload().max_bytes,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %bind_address, error = %err, "Failed to bind");
            return Err(err.into());
        }
    };
    info!(address = %bind_address, "Payroll provisions server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
