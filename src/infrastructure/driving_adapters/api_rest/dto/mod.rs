//! Data Transfer Objects
//!
//! Response DTOs for the REST API.

pub mod health;

pub use health::{HealthResponseDto, PoolStatusDto};
