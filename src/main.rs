//! Database Session Provisioner - Main Entry Point

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use db_session_provisioner::infrastructure::driven_adapters::database;
use db_session_provisioner::infrastructure::driven_adapters::{AppConfig, DatabaseConfig};
use db_session_provisioner::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "db_session_provisioner=debug,tower_http=debug,sqlx=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Variables already in the environment take precedence over .env
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => return Err(e.into()),
    }

    // Load configuration; invalid database settings abort startup here
    let config = AppConfig::load()?;
    let database_config = DatabaseConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    let provisioner = database::initialize(&database_config)?;
    let pool = provisioner.pool().clone();

    let app = api_rest::router(AppState::new(provisioner));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database connection pool closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
