//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container and
//! provisioning sessions against it through the public configuration path.

use std::time::Duration;

use axum::Router;
use serde::Deserialize;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use db_session_provisioner::application::ConnectionProvisioner;
use db_session_provisioner::infrastructure::driven_adapters::database;
use db_session_provisioner::infrastructure::driven_adapters::DatabaseConfig;
use db_session_provisioner::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub provisioner: ConnectionProvisioner<PgPool>,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application backed by a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Go through the same validation path as the binary
        let config = DatabaseConfig::load_from([("DATABASE_URL", database_url)])
            .expect("Failed to load test database config");
        let provisioner = database::initialize(&config).expect("Failed to provision test pool");

        let router = api_rest::router(AppState::new(provisioner.clone()));

        Self {
            router,
            provisioner,
            _container: container,
        }
    }

    /// Wait until the pool reports at least `expected` idle connections.
    ///
    /// Returned connections are handed back to the pool by a background task,
    /// so the idle count can lag the drop by a few milliseconds.
    pub async fn wait_for_idle(&self, expected: usize) -> usize {
        for _ in 0..100 {
            let idle = self.provisioner.status().idle;
            if idle >= expected {
                return idle;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.provisioner.status().idle
    }
}

/// Health response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub pool: PoolStatusResponse,
}

#[derive(Debug, Deserialize)]
pub struct PoolStatusResponse {
    pub size: u32,
    #[allow(dead_code)]
    pub idle: usize,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
