//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, migrations and the Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::StringRepository;
use crate::infrastructure::persistence::{InMemoryStringRepository, PgStringRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the PostgreSQL pool from configuration and applies migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    Ok(pool)
}

/// Builds the configured string store.
///
/// # Errors
///
/// Returns an error if the PostgreSQL backend is selected and the database is
/// unreachable or misconfigured.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn StringRepository>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres storage backend")?;
            let pool = connect_database(config, url).await?;
            Ok(Arc::new(PgStringRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data will be lost on restart");
            Ok(Arc::new(InMemoryStringRepository::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes storage (PostgreSQL pool + migrations, or the in-memory store),
/// builds the router and serves until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let state = AppState::new(repository);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
