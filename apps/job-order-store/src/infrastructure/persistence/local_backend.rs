//! Local order backend.
//!
//! Stores the whole collection as one JSON array under a single key of an
//! injected [`KeyValueStore`]. Every write is read, modify, write back over
//! the raw records, so entries this crate cannot decode survive writes.
//! Concurrent writers race and the last one wins.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{BackendKind, KeyValueStore, OrderBackend};
use crate::domain::job_order::{JobOrder, StoreError, WriteOutcome};

/// Order backend over a client-scoped key-value store.
#[derive(Debug)]
pub struct LocalOrderBackend<S: KeyValueStore + ?Sized> {
    storage: Arc<S>,
    key: String,
    simulated_latency: Option<Duration>,
}

impl<S: KeyValueStore + ?Sized> LocalOrderBackend<S> {
    /// Create a backend storing the collection under `key`.
    pub fn new(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            simulated_latency: None,
        }
    }

    /// Pause after every write to emulate a network round-trip.
    #[must_use]
    pub fn with_simulated_latency(mut self, latency: Option<Duration>) -> Self {
        self.simulated_latency = latency.filter(|d| !d.is_zero());
        self
    }

    /// The storage key holding the collection.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored records without interpreting them.
    async fn read_records(&self) -> Vec<Value> {
        let raw = match self.storage.load(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read local orders");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Stored orders are malformed, treating as empty"
                );
                Vec::new()
            }
        }
    }

    async fn write_records(&self, records: &[Value]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records)?;
        self.storage.save(&self.key, &raw).await
    }

    async fn emulate_latency(&self) {
        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> OrderBackend for LocalOrderBackend<S> {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    async fn get_all_orders(&self) -> Vec<JobOrder> {
        let (orders, skipped) = JobOrder::decode_each(self.read_records().await);
        if skipped > 0 {
            tracing::warn!(key = %self.key, skipped, "Skipped stored records without a string id");
        }
        orders
    }

    async fn create_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError> {
        let mut records = self.read_records().await;
        records.push(serde_json::to_value(order)?);
        self.write_records(&records).await?;
        self.emulate_latency().await;
        Ok(WriteOutcome::Persisted)
    }

    async fn update_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError> {
        let mut records = self.read_records().await;
        let outcome = match records.iter().position(|r| order.matches_record(r)) {
            Some(index) => {
                records[index] = serde_json::to_value(order)?;
                self.write_records(&records).await?;
                WriteOutcome::Persisted
            }
            None => {
                tracing::debug!(order_id = %order.id, key = %self.key, "No order to update");
                WriteOutcome::Unchanged
            }
        };
        self.emulate_latency().await;
        Ok(outcome)
    }
}
