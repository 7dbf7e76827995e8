//! Wiring of configured components.

mod container;

pub use container::Container;
