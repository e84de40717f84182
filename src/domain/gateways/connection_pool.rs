//! Connection Pool Gateway
//!
//! Abstract trait over the driver-managed pool the provisioner draws sessions from.

use async_trait::async_trait;

/// Snapshot of pool occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// Connections currently open, idle or in use
    pub size: u32,
    /// Open connections waiting in the pool
    pub idle: usize,
}

/// Pool of reusable database connections.
///
/// A checked-out connection returns itself to the pool when dropped.
#[async_trait]
pub trait ConnectionPool: Clone + Send + Sync + 'static {
    /// Connection handle returned by `checkout`
    type Connection: Send;

    /// Driver error raised by checkout
    type Error: std::error::Error + Send + Sync + 'static;

    /// Check out a connection, waiting for one to become free if needed
    async fn checkout(&self) -> Result<Self::Connection, Self::Error>;

    /// Current pool occupancy
    fn status(&self) -> PoolStatus;
}
