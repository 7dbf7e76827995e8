//! Application Layer
//!
//! - **Ports**: Interfaces for storage backends
//! - **Services**: The order store built on top of a backend

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
