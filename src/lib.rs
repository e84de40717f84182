//! Database Session Provisioner
//!
//! Validated PostgreSQL connection pool and request-scoped sessions for a web
//! backend, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
