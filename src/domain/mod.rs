//! Domain Layer
//!
//! Contains the validated configuration value, the session guard and the
//! gateway traits (ports). This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{ConnectionPool, PoolStatus};
pub use models::database_url::{DatabaseUrl, PLACEHOLDER_PATTERNS};
pub use models::session::{Session, SessionId, SessionState};
