//! Application Ports (Driven)
//!
//! Interfaces the order store uses to reach storage.

mod key_value_port;
mod order_backend_port;

#[cfg(test)]
pub use key_value_port::MockKeyValueStore;
pub use key_value_port::KeyValueStore;
pub use order_backend_port::{BackendKind, OrderBackend};
