//! Application Services
//!
//! - `OrderStore`: list, find, create and update job orders

mod order_store;

pub use order_store::OrderStore;
