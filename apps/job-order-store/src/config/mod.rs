//! Configuration module for the job order store.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates the selected backend before anything is built.
//!
//! # Usage
//!
//! ```rust,ignore
//! use job_order_store::config::load_config;
//!
//! // Load from default path (order-store.yaml)
//! let config = load_config(None)?;
//!
//! println!("backend: {}", config.store.backend);
//! ```

mod observability;
mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use store::{
    JOB_ORDERS_DB_KEY, LocalConfig, LocalProfile, ORDERS_KEY, RemoteConfig, StoreConfig,
};

use crate::application::ports::BackendKind;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "order-store.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Order store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "order-store.yaml".
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    match config.store.backend {
        BackendKind::Local => {
            if config.store.local.storage_key().trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "store.local.key must not be empty".to_string(),
                ));
            }
            if config.store.local.data_dir.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "store.local.data_dir must not be empty".to_string(),
                ));
            }
        }
        BackendKind::Remote => {
            let endpoint = config.store.remote.endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::ValidationError(
                    "store.remote.endpoint is required for the remote backend".to_string(),
                ));
            }
            let url = reqwest::Url::parse(endpoint).map_err(|e| {
                ConfigError::ValidationError(format!("store.remote.endpoint is invalid: {e}"))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::ValidationError(
                    "store.remote.endpoint must use http or https".to_string(),
                ));
            }
            if config.store.remote.timeout_secs == Some(0) {
                return Err(ConfigError::ValidationError(
                    "store.remote.timeout_secs must be positive".to_string(),
                ));
            }
        }
    }

    let valid_formats = ["json", "pretty"];
    let format = config.observability.logging.format.to_ascii_lowercase();
    if !valid_formats.contains(&format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}
