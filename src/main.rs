//! Bank API - Main Application Entry Point
//!
//! REST API server for creating accounts, listing them, and depositing into
//! them.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, one connection per request (no pool)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the connection factory
//! 3. Run database migrations (unless disabled)
//! 4. Build HTTP router
//! 5. Serve on configured port until Ctrl-C / SIGTERM

use std::sync::Arc;

use bank_api::{
    config::Config,
    db::{self, ConnectionFactory},
    routes,
    services::account_service::PgAccountStore,
};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        host = %config.database_host,
        database = %config.database_name,
        "Configuration loaded"
    );

    let connections = ConnectionFactory::new(config.connect_options());

    if config.run_migrations {
        db::run_migrations(&connections).await?;
        tracing::info!("Database migrations complete");
    } else {
        tracing::info!("Skipping database migrations");
    }

    let store = Arc::new(PgAccountStore::new(connections));
    let app = routes::create_router(store);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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
