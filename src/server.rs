//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::PgUrlMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Number of recent mappings listed in the startup report.
const STARTUP_RECENT_LIMIT: i64 = 3;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Shortener service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let repository = Arc::new(PgUrlMappingRepository::new(Arc::new(pool.clone())));
    let shortener_service = Arc::new(ShortenerService::with_max_attempts(
        repository,
        config.code_max_attempts,
    ));

    report_store_contents(&shortener_service).await;

    let state = AppState::new(shortener_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Builds the process-wide connection pool from config.
///
/// Connections are checked out per query and returned to the pool when the
/// query future completes or is dropped.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.connect_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Logs the number of stored mappings and the most recent ones.
///
/// Failures are logged and ignored; the server starts regardless.
async fn report_store_contents(service: &ShortenerService<PgUrlMappingRepository>) {
    match service.summary().await {
        Ok(summary) => tracing::info!(
            total_urls = summary.total_urls,
            total_clicks = summary.total_clicks,
            "Store contents"
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to count stored urls");
            return;
        }
    }

    match service.list(Some(STARTUP_RECENT_LIMIT)).await {
        Ok(recent) => {
            for mapping in recent {
                tracing::info!("  {} -> {}", mapping.short_code, mapping.original_url);
            }
        }
        Err(e) => tracing::warn!(error = %e, "Failed to list recent urls"),
    }
}

/// Resolves when Ctrl-C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
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
