//! Wire types for the spreadsheet endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::domain::job_order::JobOrder;

/// Content type sent with mutation requests.
///
/// Must stay a CORS-safelisted type: the endpoint answers no pre-flight.
pub const MUTATION_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Action understood by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Read the whole collection (query parameter).
    Get,
    /// Append a record.
    Create,
    /// Replace a record by id.
    Update,
}

impl Action {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

/// Body of a mutation request: `{"action": ..., "data": <JobOrder>}`.
#[derive(Debug, Serialize)]
pub struct ActionEnvelope<'a> {
    /// The mutation to apply.
    pub action: Action,
    /// The record it applies to.
    pub data: &'a JobOrder,
}

/// Decode a read response into orders.
///
/// A payload that is not an array degrades to an empty collection. Inside an
/// array, rows without a string `id` are skipped one by one.
pub fn decode_orders(payload: Value) -> Vec<JobOrder> {
    let Value::Array(records) = payload else {
        tracing::warn!(
            kind = value_kind(&payload),
            "Remote payload is not an array, treating as empty"
        );
        return Vec::new();
    };

    let (orders, skipped) = JobOrder::decode_each(records);
    if skipped > 0 {
        tracing::warn!(skipped, "Skipped remote rows without a string id");
    }
    orders
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
