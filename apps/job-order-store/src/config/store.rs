//! Store backend configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::ports::BackendKind;

/// Storage key used by the `orders` profile.
pub const ORDERS_KEY: &str = "halagel_orders";

/// Storage key used by the `job_orders_db` profile.
pub const JOB_ORDERS_DB_KEY: &str = "halagel_job_orders_db";

/// Backend selection and per-backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Which backend is active.
    #[serde(default)]
    pub backend: BackendKind,
    /// Local backend settings.
    #[serde(default)]
    pub local: LocalConfig,
    /// Remote backend settings.
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Preset local layouts in use by existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalProfile {
    /// `halagel_orders`, writes pause 500 ms.
    #[default]
    Orders,
    /// `halagel_job_orders_db`, writes return immediately.
    JobOrdersDb,
}

impl LocalProfile {
    /// Storage key of the profile.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Orders => ORDERS_KEY,
            Self::JobOrdersDb => JOB_ORDERS_DB_KEY,
        }
    }

    /// Simulated write latency of the profile.
    #[must_use]
    pub const fn simulated_latency(&self) -> Option<Duration> {
        match self {
            Self::Orders => Some(Duration::from_millis(500)),
            Self::JobOrdersDb => None,
        }
    }
}

/// Local backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Preset key and latency.
    #[serde(default)]
    pub profile: LocalProfile,
    /// Storage key, overriding the profile's.
    #[serde(default)]
    pub key: Option<String>,
    /// Directory holding the key files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Write latency in milliseconds, overriding the profile's. `0` disables it.
    #[serde(default)]
    pub simulated_latency_ms: Option<u64>,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            profile: LocalProfile::default(),
            key: None,
            data_dir: default_data_dir(),
            simulated_latency_ms: None,
        }
    }
}

impl LocalConfig {
    /// Effective storage key.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.key.as_deref().unwrap_or_else(|| self.profile.key())
    }

    /// Effective simulated write latency.
    #[must_use]
    pub fn simulated_latency(&self) -> Option<Duration> {
        match self.simulated_latency_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => self.profile.simulated_latency(),
        }
    }
}

fn default_data_dir() -> String {
    "./data".to_string()
}

/// Remote backend configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint URL of the spreadsheet web app.
    #[serde(default)]
    pub endpoint: String,
    /// Per-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl RemoteConfig {
    /// Effective request timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
