//! Order Store Service
//!
//! The single entry point callers use to list, look up, create and update
//! job orders. Delegates whole-collection access to one [`OrderBackend`]
//! chosen at construction.

use std::fmt;
use std::sync::Arc;

use crate::application::ports::{BackendKind, OrderBackend};
use crate::domain::job_order::{JobOrder, JobOrderId, StoreError, WriteOutcome};

/// Job order store over one active backend.
#[derive(Clone)]
pub struct OrderStore {
    backend: Arc<dyn OrderBackend>,
}

impl OrderStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn OrderBackend>) -> Self {
        Self { backend }
    }

    /// The kind of the active backend.
    #[must_use]
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Fetch every persisted order, in insertion order.
    ///
    /// Never fails: unreadable data yields an empty collection.
    pub async fn get_all_orders(&self) -> Vec<JobOrder> {
        let orders = self.backend.get_all_orders().await;
        tracing::debug!(
            backend = %self.backend.kind(),
            count = orders.len(),
            "Loaded orders"
        );
        orders
    }

    /// Find the first order with the given id.
    pub async fn get_order_by_id(&self, id: &str) -> Option<JobOrder> {
        self.get_all_orders()
            .await
            .into_iter()
            .find(|order| order.has_id(id))
    }

    /// Append an order to the collection.
    ///
    /// A remote backend returns [`WriteOutcome::Dispatched`]; read the
    /// order back to confirm it landed.
    pub async fn create_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError> {
        let outcome = self.backend.create_order(order).await?;
        tracing::info!(order_id = %order.id, %outcome, "Order created");
        Ok(outcome)
    }

    /// Replace the first order whose id matches `order.id`.
    ///
    /// Returns [`WriteOutcome::Unchanged`] when a local backend holds no
    /// such order.
    pub async fn update_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError> {
        let outcome = self.backend.update_order(order).await?;
        tracing::info!(order_id = %order.id, %outcome, "Order updated");
        Ok(outcome)
    }

    /// Short random id for a new order. Not collision checked.
    #[must_use]
    pub fn generate_id() -> JobOrderId {
        JobOrderId::generate()
    }

    /// UUID v4 id for a new order.
    #[must_use]
    pub fn generate_uuid() -> JobOrderId {
        JobOrderId::generate_uuid()
    }
}

impl fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderStore")
            .field("backend", &self.backend.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job_order::SHORT_ID_LEN;
    use crate::infrastructure::persistence::{InMemoryKeyValueStore, LocalOrderBackend};
    use serde_json::json;

    const KEY: &str = "test_orders";

    fn store_with(storage: Arc<InMemoryKeyValueStore>) -> OrderStore {
        OrderStore::new(Arc::new(LocalOrderBackend::new(storage, KEY)))
    }

    fn empty_store() -> OrderStore {
        store_with(Arc::new(InMemoryKeyValueStore::new()))
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = empty_store();
        assert!(store.get_all_orders().await.is_empty());
        assert!(store.get_order_by_id("anything").await.is_none());
    }

    #[tokio::test]
    async fn create_appends_in_order() {
        let store = empty_store();

        store.create_order(&JobOrder::new("a")).await.unwrap();
        store.create_order(&JobOrder::new("b")).await.unwrap();

        let ids: Vec<_> = store
            .get_all_orders()
            .await
            .into_iter()
            .map(|o| o.id.into_inner())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn get_by_id_returns_first_duplicate() {
        let storage = Arc::new(InMemoryKeyValueStore::new().with_entry(
            KEY,
            json!([
                {"id": "dup", "n": 1},
                {"id": "other"},
                {"id": "dup", "n": 2}
            ])
            .to_string(),
        ));
        let store = store_with(storage);

        let found = store.get_order_by_id("dup").await.unwrap();
        assert_eq!(found.field("n"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn update_reports_outcome() {
        let store = empty_store();
        store.create_order(&JobOrder::new("a")).await.unwrap();

        let hit = store
            .update_order(&JobOrder::new("a").with_field("note", "x"))
            .await
            .unwrap();
        let miss = store.update_order(&JobOrder::new("zzz")).await.unwrap();

        assert_eq!(hit, WriteOutcome::Persisted);
        assert_eq!(miss, WriteOutcome::Unchanged);
    }

    #[test]
    fn generators() {
        assert_eq!(OrderStore::generate_id().as_str().len(), SHORT_ID_LEN);
        assert_eq!(OrderStore::generate_uuid().as_str().len(), 36);
    }

    #[test]
    fn debug_shows_backend_kind() {
        let store = empty_store();
        assert_eq!(store.backend_kind(), BackendKind::Local);
        assert_eq!(format!("{store:?}"), "OrderStore { backend: Local }");
    }
}
