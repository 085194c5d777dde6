//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`      - Short link redirect (public)
//! - `GET  /health`      - Health check (public)
//! - `/auth/*`           - Registration and login (public)
//! - `/urls/*`           - Link management (bearer token; creation optional)
//! - `/users/{id}`       - Profile lookup (bearer token)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy
//! - **Path normalization** - Trailing slash handling

use axum::{Router, routing::get};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Static segments win over the `/{code}` capture in axum's matcher, so
/// `/health`, `/auth`, `/urls`, and `/users` are never shadowed by
/// redirect lookups.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/auth", api::routes::auth_routes())
        .nest("/urls", api::routes::link_routes())
        .nest("/users", api::routes::user_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// Wraps the router with trailing-slash normalization for serving.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
