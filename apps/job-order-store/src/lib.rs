// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::needless_pass_by_value
    )
)]

//! Job Order Store
//!
//! Persistence for job-order records. The whole collection is loaded on
//! every read and written back on every local write; remote writes are
//! dispatched without observing the server's answer.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! - **Domain**: `JobOrder`, `JobOrderId`, `WriteOutcome`, `StoreError`
//! - **Application**: ports (`OrderBackend`, `KeyValueStore`) and the
//!   `OrderStore` service
//! - **Infrastructure**: local backend over in-memory or file key-value
//!   stores, the remote spreadsheet backend, and the wiring container
//!
//! # Example
//!
//! ```rust,ignore
//! use job_order_store::{Container, JobOrder, OrderStore, config::load_config};
//!
//! let config = load_config(None)?;
//! let store = Container::from_config(&config.store)?.order_store();
//!
//! let order = JobOrder::new(OrderStore::generate_id()).with_field("customer", "Acme");
//! store.create_order(&order).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Record types and errors.
pub mod domain;

/// Application layer - Ports and the order store service.
pub mod application;

/// Infrastructure layer - Backend adapters and wiring.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// Domain re-exports
pub use domain::job_order::{JobOrder, JobOrderId, StoreError, WriteOutcome};

// Application re-exports
pub use application::ports::{BackendKind, KeyValueStore, OrderBackend};
pub use application::services::OrderStore;

// Infrastructure re-exports
pub use infrastructure::config::Container;
pub use infrastructure::persistence::{
    FileKeyValueStore, InMemoryKeyValueStore, LocalOrderBackend,
};
pub use infrastructure::remote::RemoteOrderBackend;
