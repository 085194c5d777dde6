//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the
//! Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{AuthService, LinkService, UserService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Repository and service wiring
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repository));
    let auth_service = Arc::new(AuthService::new(
        user_service.clone(),
        config.jwt_secret.clone(),
        config.jwt_expiration_hours,
    ));
    let link_service = Arc::new(LinkService::new(
        link_repository,
        config.base_url.clone(),
        config.short_code_length,
    ));

    let state = AppState {
        link_service,
        auth_service,
        user_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
