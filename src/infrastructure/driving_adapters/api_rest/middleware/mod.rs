//! API Middleware
//!
//! Request extractors for the REST API.

pub mod db_session;

pub use db_session::DbSession;
