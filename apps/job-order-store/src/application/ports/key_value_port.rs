//! Key-Value Store Port (Driven Port)
//!
//! Client-scoped string storage used by the local backend. Injected so that
//! the store never reaches for process-wide state.

use async_trait::async_trait;

use crate::domain::job_order::StoreError;

/// Port for a client-scoped key-value store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
