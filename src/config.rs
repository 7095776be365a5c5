//! Configuration loader for the `machine-condition` prediction service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
//!
use std::env;

use anyhow::Result;

/// Read an optional string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Path to the serialized fitted scaler artifact.
    pub scaler_path: String,

    /// Path to the serialized fitted classifier artifact.
    pub model_path: String,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `SCALER_PATH` – scaler artifact location (default: `artifacts/scaler.json`)
/// - `MODEL_PATH` – classifier artifact location (default: `artifacts/svm_model.json`)
///
/// Both artifacts are produced by the training environment and shipped with
/// the service; the defaults are the fixed relative paths they land at.
pub fn load_from_env() -> Result<Config> {
    // ---
    let scaler_path = env_or!("SCALER_PATH", "artifacts/scaler.json");
    let model_path = env_or!("MODEL_PATH", "artifacts/svm_model.json");

    Ok(Config {
        scaler_path,
        model_path,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  SCALER_PATH : {}", self.scaler_path);
        tracing::info!("  MODEL_PATH  : {}", self.model_path);
    }
}
