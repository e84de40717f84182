//! Database Connection Management
//!
//! Builds the PostgreSQL pool from validated configuration and plugs it into
//! the `ConnectionPool` gateway.

use std::str::FromStr;

use async_trait::async_trait;
use log::LevelFilter;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool, Postgres};

use super::config::DatabaseConfig;
use crate::application::ConnectionProvisioner;
use crate::domain::gateways::{ConnectionPool, PoolStatus};
use crate::domain::models::database_url::DatabaseUrl;
use crate::shared::errors::ConfigurationError;

const POSTGRES_SCHEMES: &[&str] = &["postgres", "postgresql"];

#[async_trait]
impl ConnectionPool for PgPool {
    type Connection = PoolConnection<Postgres>;
    type Error = sqlx::Error;

    async fn checkout(&self) -> Result<Self::Connection, Self::Error> {
        self.acquire().await
    }

    fn status(&self) -> PoolStatus {
        PoolStatus {
            size: self.size(),
            idle: self.num_idle(),
        }
    }
}

/// Translate a validated URL into driver connect options
///
/// # Errors
///
/// Returns `ConfigurationError::Malformed` if the URL is not a PostgreSQL URL.
pub fn connect_options(url: &DatabaseUrl) -> Result<PgConnectOptions, ConfigurationError> {
    let normalized = url.without_driver_suffix();

    let scheme = normalized.split_once("://").map(|(scheme, _)| scheme);
    if !scheme.is_some_and(|s| POSTGRES_SCHEMES.contains(&s.to_ascii_lowercase().as_str())) {
        return Err(ConfigurationError::Malformed {
            reason: "scheme must be postgres:// or postgresql://".to_string(),
        });
    }

    let options = PgConnectOptions::from_str(&normalized).map_err(|e| ConfigurationError::Malformed {
        reason: e.to_string(),
    })?;

    Ok(options.log_statements(LevelFilter::Debug))
}

/// Create a PostgreSQL connection pool from configuration.
///
/// The pool is lazy: connections are opened on first checkout, so this never
/// touches the network. Must be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns `ConfigurationError::Malformed` if the URL cannot be parsed.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, ConfigurationError> {
    let options = connect_options(&config.url)?;
    Ok(PgPoolOptions::new().connect_lazy_with(options))
}

/// Provision the process-wide session provider from configuration
///
/// # Errors
///
/// Returns `ConfigurationError::Malformed` if the URL cannot be parsed.
pub fn initialize(config: &DatabaseConfig) -> Result<ConnectionProvisioner<PgPool>, ConfigurationError> {
    let pool = create_pool(config)?;
    tracing::info!(database_url = %config.url, "Database connection pool provisioned");
    Ok(ConnectionProvisioner::new(pool))
}
