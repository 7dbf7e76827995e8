//! Domain Layer
//!
//! Record types with no infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`job_order`]: Job order records, identifiers, and write outcomes

pub mod job_order;
