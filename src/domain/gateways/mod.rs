//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod connection_pool;

pub use connection_pool::{ConnectionPool, PoolStatus};
