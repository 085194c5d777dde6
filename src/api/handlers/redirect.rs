//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by short code (soft-deleted rows included; deleted
///    links keep redirecting by design)
/// 2. Atomically increment the click counter
/// 3. Return 301 Moved Permanently with the original URL in `Location`
///
/// Lookup and increment are two separate store round trips, not a
/// transaction; a crash between them can lose a click.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code. A failure in the increment
/// step is also reported as 404 rather than redirecting with an
/// unrecorded click.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    match resolve_and_count(&state, &code).await {
        Ok(original_url) => Ok((
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, original_url)],
        )),
        Err(err @ AppError::NotFound { .. }) => Err(err),
        Err(err) => {
            error!(code = %code, error = %err, "Redirect failed after lookup");
            Err(AppError::not_found(
                "Short URL not found or error processing redirect",
                json!({ "code": code }),
            ))
        }
    }
}

async fn resolve_and_count(state: &AppState, code: &str) -> Result<String, AppError> {
    let link = state.link_service.find_by_code(code).await?;

    state.link_service.increment_clicks(link.id).await?;

    Ok(link.original_url)
}
