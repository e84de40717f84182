//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL connection pool
//! - Configuration

pub mod config;
pub mod database;

pub use config::{AppConfig, DatabaseConfig};
