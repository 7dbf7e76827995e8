//! Job Order Context
//!
//! The record being stored, its identifier, and the outcome of writes.
//!
//! # Key Concepts
//!
//! - **JobOrder**: opaque payload with a required string `id`
//! - **WriteOutcome**: whether a write was observed or only dispatched

pub mod aggregate;
pub mod errors;
pub mod identifiers;
pub mod value_objects;

pub use aggregate::JobOrder;
pub use errors::StoreError;
pub use identifiers::{JobOrderId, SHORT_ID_LEN};
pub use value_objects::WriteOutcome;
