//! Local backend integration tests.
//!
//! Drives `OrderStore` end to end over both the in-memory and the file
//! key-value stores.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::json;

use job_order_store::config::{LocalConfig, LocalProfile, StoreConfig};
use job_order_store::{
    Container, FileKeyValueStore, InMemoryKeyValueStore, JobOrder, KeyValueStore, OrderStore,
    WriteOutcome,
};

fn quick_config() -> StoreConfig {
    StoreConfig {
        local: LocalConfig {
            profile: LocalProfile::JobOrdersDb,
            ..LocalConfig::default()
        },
        ..StoreConfig::default()
    }
}

fn order(value: serde_json::Value) -> JobOrder {
    serde_json::from_value(value).unwrap()
}

async fn run_scenario(store: &OrderStore) {
    assert!(store.get_all_orders().await.is_empty());

    let a = order(json!({"id": "a", "customer": "Acme", "status": "new"}));
    assert_eq!(store.create_order(&a).await.unwrap(), WriteOutcome::Persisted);
    assert_eq!(store.get_all_orders().await, vec![a.clone()]);

    let b = order(json!({"id": "b", "customer": "Globex", "status": "new"}));
    store.create_order(&b).await.unwrap();
    assert_eq!(store.get_all_orders().await, vec![a.clone(), b.clone()]);

    let a2 = order(json!({"id": "a", "note": "x"}));
    assert_eq!(store.update_order(&a2).await.unwrap(), WriteOutcome::Persisted);
    assert_eq!(store.get_all_orders().await, vec![a2.clone(), b.clone()]);

    assert_eq!(store.get_order_by_id("b").await, Some(b.clone()));
    assert_eq!(store.get_order_by_id("z").await, None);

    let missing = order(json!({"id": "z", "note": "ghost"}));
    assert_eq!(
        store.update_order(&missing).await.unwrap(),
        WriteOutcome::Unchanged
    );
    assert_eq!(store.get_all_orders().await, vec![a2, b]);
}

#[tokio::test]
async fn scenario_over_in_memory_store() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let store = Container::with_storage(&quick_config(), storage).order_store();

    run_scenario(&store).await;
}

#[tokio::test]
async fn scenario_over_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileKeyValueStore::new(dir.path()));
    let store = Container::with_storage(&quick_config(), storage).order_store();

    run_scenario(&store).await;
}

#[tokio::test]
async fn persisted_collection_survives_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = quick_config();

    let first = Container::with_storage(&config, Arc::new(FileKeyValueStore::new(dir.path())))
        .order_store();
    for id in ["3", "1", "2"] {
        first
            .create_order(&JobOrder::new(id).with_field("seq", id))
            .await
            .unwrap();
    }

    let second = Container::with_storage(&config, Arc::new(FileKeyValueStore::new(dir.path())))
        .order_store();
    let ids: Vec<_> = second
        .get_all_orders()
        .await
        .into_iter()
        .map(|o| o.id.into_inner())
        .collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[tokio::test]
async fn stored_blob_is_a_plain_json_array() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let store = Container::with_storage(&quick_config(), Arc::clone(&storage)).order_store();

    store
        .create_order(&JobOrder::new("a").with_field("qty", 2))
        .await
        .unwrap();

    let raw = storage.load("halagel_job_orders_db").await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, json!([{"id": "a", "qty": 2}]));
}

#[tokio::test]
async fn corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileKeyValueStore::new(dir.path());
    storage
        .save("halagel_job_orders_db", "[{\"id\": \"a\"")
        .await
        .unwrap();

    let store = Container::with_storage(&quick_config(), Arc::new(storage)).order_store();

    assert!(store.get_all_orders().await.is_empty());
    assert!(store.get_order_by_id("a").await.is_none());
}

#[tokio::test]
async fn profiles_do_not_share_keys() {
    let storage = Arc::new(InMemoryKeyValueStore::new());

    let orders_profile = StoreConfig {
        local: LocalConfig {
            profile: LocalProfile::Orders,
            simulated_latency_ms: Some(0),
            ..LocalConfig::default()
        },
        ..StoreConfig::default()
    };
    let a = Container::with_storage(&orders_profile, Arc::clone(&storage)).order_store();
    let b = Container::with_storage(&quick_config(), Arc::clone(&storage)).order_store();

    a.create_order(&JobOrder::new("only-in-orders")).await.unwrap();

    assert_eq!(a.get_all_orders().await.len(), 1);
    assert!(b.get_all_orders().await.is_empty());
}

#[tokio::test]
async fn duplicate_ids_are_kept() {
    let store =
        Container::with_storage(&quick_config(), Arc::new(InMemoryKeyValueStore::new()))
            .order_store();

    store
        .create_order(&JobOrder::new("dup").with_field("n", 1))
        .await
        .unwrap();
    store
        .create_order(&JobOrder::new("dup").with_field("n", 2))
        .await
        .unwrap();
    store
        .update_order(&JobOrder::new("dup").with_field("n", 3))
        .await
        .unwrap();

    let all = store.get_all_orders().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].field("n"), Some(&json!(3)));
    assert_eq!(all[1].field("n"), Some(&json!(2)));
    assert_eq!(
        store.get_order_by_id("dup").await.unwrap().field("n"),
        Some(&json!(3))
    );
}

#[tokio::test]
async fn generated_ids_round_trip() {
    let store =
        Container::with_storage(&quick_config(), Arc::new(InMemoryKeyValueStore::new()))
            .order_store();

    let id = OrderStore::generate_id();
    store.create_order(&JobOrder::new(id.clone())).await.unwrap();

    assert!(store.get_order_by_id(id.as_str()).await.is_some());
}
