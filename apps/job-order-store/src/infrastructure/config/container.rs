//! Dependency Injection Container
//!
//! Resolves the configured backend once and wires it into an `OrderStore`.

use std::sync::Arc;

use crate::application::ports::{BackendKind, KeyValueStore, OrderBackend};
use crate::application::services::OrderStore;
use crate::config::StoreConfig;
use crate::domain::job_order::StoreError;
use crate::infrastructure::persistence::{FileKeyValueStore, LocalOrderBackend};
use crate::infrastructure::remote::RemoteOrderBackend;

/// Dependency injection container.
///
/// Holds the active backend. Build with [`Container::from_config`], or
/// inject a key-value store with [`Container::with_storage`].
pub struct Container {
    backend: Arc<dyn OrderBackend>,
}

impl Container {
    /// Build the backend selected by `config`.
    ///
    /// The local backend persists under `config.local.data_dir`.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        match config.backend {
            BackendKind::Local => {
                let storage = Arc::new(FileKeyValueStore::new(&config.local.data_dir));
                Ok(Self::with_storage(config, storage))
            }
            BackendKind::Remote => {
                let backend =
                    RemoteOrderBackend::new(&config.remote.endpoint, config.remote.timeout())?;
                tracing::info!(endpoint = %backend.endpoint(), "Using remote order backend");
                Ok(Self {
                    backend: Arc::new(backend),
                })
            }
        }
    }

    /// Build a local backend over the given key-value store.
    ///
    /// Remote settings in `config` are ignored.
    pub fn with_storage<S: KeyValueStore + 'static>(config: &StoreConfig, storage: Arc<S>) -> Self {
        let key = config.local.storage_key();
        let latency = config.local.simulated_latency();
        tracing::warn!(
            key,
            latency_ms = latency.map(|d| d.as_millis()),
            "Using local order backend; data stays on this client"
        );
        Self {
            backend: Arc::new(
                LocalOrderBackend::new(storage, key).with_simulated_latency(latency),
            ),
        }
    }

    /// Get the active backend.
    pub fn backend(&self) -> Arc<dyn OrderBackend> {
        Arc::clone(&self.backend)
    }

    /// Create an `OrderStore` over the active backend.
    pub fn order_store(&self) -> OrderStore {
        OrderStore::new(Arc::clone(&self.backend))
    }
}
