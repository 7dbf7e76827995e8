//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `persistence/`: Key-value stores (in-memory, file) and the local backend
//! - `remote/`: Spreadsheet HTTP endpoint backend
//! - `config/`: Dependency injection container

pub mod config;
pub mod persistence;
pub mod remote;
