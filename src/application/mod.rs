//! Application Layer
//!
//! Session provisioning on top of the pool gateway.

pub mod provisioner;

pub use provisioner::ConnectionProvisioner;
