//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and extractors for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::application::ConnectionProvisioner;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provisioner: ConnectionProvisioner<PgPool>,
}

impl AppState {
    #[must_use]
    pub fn new(provisioner: ConnectionProvisioner<PgPool>) -> Self {
        Self { provisioner }
    }
}

/// Build the application router with tracing, request ids and CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::router())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
