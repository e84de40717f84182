//! Database Session Extractor
//!
//! Acquires one session per request from the shared provisioner. The session
//! is released when the handler's future completes or is dropped.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::Postgres;

use crate::domain::models::session::Session;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Request-scoped database session
pub struct DbSession(pub Session<PoolConnection<Postgres>>);

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = state.provisioner.acquire_session().await?;
        Ok(Self(session))
    }
}
