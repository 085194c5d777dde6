//! API route groups composed by the top-level router.

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_user_handler, list_links_handler, login_handler,
    register_handler, update_link_handler,
};
use crate::state::AppState;

/// Registration and login, both public.
///
/// # Endpoints
///
/// - `POST /register` - Create an account, returns a bearer token
/// - `POST /login`    - Exchange credentials for a bearer token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Link management.
///
/// Creation extracts an optional identity, so anonymous shortening is
/// allowed; list/update/delete extract a strict identity and scope every
/// query by the owner.
///
/// # Endpoints
///
/// - `POST   /`     - Shorten a URL (bearer token optional)
/// - `GET    /`     - List the caller's links
/// - `PATCH  /{id}` - Update a link's destination
/// - `DELETE /{id}` - Soft-delete a link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_link_handler).get(list_links_handler))
        .route(
            "/{id}",
            patch(update_link_handler).delete(delete_link_handler),
        )
}

/// User profile lookup, authenticated.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(get_user_handler))
}
