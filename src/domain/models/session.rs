//! Session Domain Model
//!
//! A session is one unit of work against the database, bound to a single
//! pooled connection for as long as the caller holds it.

use std::ops::{Deref, DerefMut};

use uuid::Uuid;

/// Lifecycle of a session handle: `Created -> Active -> Released`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Connection checked out, not yet handed to a caller
    Created,
    /// Owned by a caller
    Active,
    /// Connection returned to the pool (terminal)
    Released,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Active => "active",
            Self::Released => "released",
        };
        f.write_str(name)
    }
}

/// Newtype wrapper for Session ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random SessionId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scoped session guard over one pooled connection `C`.
///
/// The connection goes back to the pool when the guard is dropped, which covers
/// normal scope exit, early returns, `?` propagation and panics alike. Release
/// consumes the guard, so a released session cannot be touched again.
pub struct Session<C> {
    id: SessionId,
    state: SessionState,
    connection: C,
}

impl<C> Session<C> {
    /// Wrap a freshly checked-out connection
    #[must_use]
    pub fn new(connection: C) -> Self {
        let id = SessionId::new();
        tracing::trace!(session_id = %id, "Session created");
        Self {
            id,
            state: SessionState::Created,
            connection,
        }
    }

    /// Mark the session as owned by a caller
    #[must_use]
    pub fn activate(mut self) -> Self {
        self.state = SessionState::Active;
        tracing::trace!(session_id = %self.id, "Session active");
        self
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Release the session now instead of at end of scope
    pub fn release(self) {
        drop(self);
    }
}

impl<C> Deref for Session<C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl<C> DerefMut for Session<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}

impl<C> Drop for Session<C> {
    fn drop(&mut self) {
        self.state = SessionState::Released;
        if std::thread::panicking() {
            tracing::warn!(session_id = %self.id, "Session released during panic");
        } else {
            tracing::debug!(session_id = %self.id, "Session released");
        }
        // `connection` is dropped right after this, handing it back to its pool
    }
}

impl<C> std::fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
