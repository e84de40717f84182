//! Health Handler
//!
//! Round-trips a trivial query through a request-scoped session.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::HealthResponseDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::DbSession;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for the health endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health - Check that a session can be acquired and used
///
/// # Responses
///
/// * 200 OK - Database reachable, with current pool occupancy
/// * 503 Service Unavailable - No connection could be checked out
/// * 500 Internal Server Error - The probe query failed
#[axum::debug_handler]
async fn health(
    State(state): State<AppState>,
    DbSession(mut session): DbSession,
) -> Result<Json<HealthResponseDto>, ApiError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&mut **session)
        .await?;

    tracing::debug!(session_id = %session.id(), "Health probe succeeded");
    session.release();

    Ok(Json(HealthResponseDto::ok(state.provisioner.status())))
}
