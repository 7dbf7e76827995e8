//! Spreadsheet endpoint adapter.

mod adapter;
pub mod api_types;

pub use adapter::RemoteOrderBackend;
pub use api_types::{Action, ActionEnvelope, MUTATION_CONTENT_TYPE};
