//! Persistence Adapters
//!
//! Key-value stores and the local order backend built on them.

pub mod file;
pub mod in_memory;
pub mod local_backend;

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
pub use local_backend::LocalOrderBackend;
