//! Domain Models
//!
//! Core entities of the provisioner.

pub mod database_url;
pub mod session;
