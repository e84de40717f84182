//! Connection Provisioner
//!
//! Hands out request-scoped sessions drawn from a single pool. The provisioner
//! is built once at startup and cloned into whatever needs it; clones share the
//! same pool.

use futures::future::BoxFuture;

use crate::domain::gateways::{ConnectionPool, PoolStatus};
use crate::domain::models::session::Session;

/// Provider of scoped database sessions
#[derive(Clone)]
pub struct ConnectionProvisioner<P> {
    pool: P,
}

impl<P: ConnectionPool> ConnectionProvisioner<P> {
    /// Create a provisioner around an already constructed pool
    #[must_use]
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    /// The underlying pool
    #[must_use]
    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Current pool occupancy
    #[must_use]
    pub fn status(&self) -> PoolStatus {
        self.pool.status()
    }

    /// Check out one connection and wrap it in an active session.
    ///
    /// The connection returns to the pool when the session is dropped or
    /// released, whichever comes first.
    ///
    /// # Errors
    ///
    /// Returns the pool's own error unchanged when no connection can be
    /// checked out (pool closed, timed out, connection failure).
    pub async fn acquire_session(&self) -> Result<Session<P::Connection>, P::Error> {
        let connection = self.pool.checkout().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to acquire session");
            e
        })?;

        let session = Session::new(connection).activate();
        tracing::debug!(session_id = %session.id(), "Session acquired");
        Ok(session)
    }

    /// Run `f` with a freshly acquired session and release it afterwards.
    ///
    /// The session is released before the result is returned, on both the
    /// `Ok` and `Err` paths, and during unwinding if `f` panics. No commit or
    /// rollback is issued; that is up to `f`.
    ///
    /// ```ignore
    /// let one: i32 = provisioner
    ///     .with_session(|session| Box::pin(async move {
    ///         sqlx::query_scalar("SELECT 1").fetch_one(&mut ***session).await
    ///     }))
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the checkout error converted into `E`, or whatever `f` returns.
    pub async fn with_session<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: for<'s> FnOnce(&'s mut Session<P::Connection>) -> BoxFuture<'s, Result<R, E>> + Send,
        E: From<P::Error>,
    {
        let mut session = self.acquire_session().await?;
        let session_id = session.id();

        let result = f(&mut session).await;
        session.release();

        if result.is_err() {
            tracing::debug!(session_id = %session_id, "Session scope ended with an error");
        }
        result
    }
}
