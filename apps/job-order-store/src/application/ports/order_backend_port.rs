//! Order Backend Port (Driven Port)
//!
//! Whole-collection access to wherever job orders are persisted.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::job_order::{JobOrder, StoreError, WriteOutcome};

/// Which kind of backend holds the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Client-scoped key-value storage.
    #[default]
    Local,
    /// Spreadsheet-backed HTTP endpoint.
    Remote,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Port for a job order backend.
///
/// Reads are infallible: failures degrade to an empty collection and are
/// logged by the implementation.
#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// The kind of backend.
    fn kind(&self) -> BackendKind;

    /// Fetch the full ordered collection.
    async fn get_all_orders(&self) -> Vec<JobOrder>;

    /// Append a record to the collection.
    async fn create_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError>;

    /// Replace the first record whose id matches `order.id`.
    async fn update_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&BackendKind::Remote).unwrap(),
            "\"remote\""
        );
        let kind: BackendKind = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(kind, BackendKind::Local);
    }

    #[test]
    fn backend_kind_default_is_local() {
        assert_eq!(BackendKind::default(), BackendKind::Local);
        assert_eq!(BackendKind::default().to_string(), "local");
    }
}
