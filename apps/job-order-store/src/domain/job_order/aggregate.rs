//! Job order record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::identifiers::JobOrderId;

/// A job order record.
///
/// Only `id` is interpreted. Every other field is carried through untouched,
/// so records written by other clients keep their full shape on round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOrder {
    /// Record identifier. Expected unique, never enforced.
    pub id: JobOrderId,
    /// Remaining fields, opaque to the store.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl JobOrder {
    /// Create a record with no fields besides its id.
    #[must_use]
    pub fn new(id: impl Into<JobOrderId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Set a field, replacing any previous value.
    ///
    /// The `id` key is held separately and is ignored here.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "id" {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether this record carries the given id.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_str() == id
    }

    /// Decode raw records one at a time.
    ///
    /// Records that are not an object with a string `id` are skipped and
    /// counted instead of failing the whole collection.
    pub fn decode_each(records: impl IntoIterator<Item = Value>) -> (Vec<Self>, usize) {
        let mut skipped = 0;
        let orders = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(order) => Some(order),
                Err(_) => {
                    skipped += 1;
                    None
                }
            })
            .collect();
        (orders, skipped)
    }

    /// Whether a raw record carries this order's id.
    pub fn matches_record(&self, record: &Value) -> bool {
        record.get("id").and_then(Value::as_str) == Some(self.id.as_str())
    }
}
