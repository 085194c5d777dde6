//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, LinkResponse, UpdateLinkRequest,
};
use crate::api::extract::{AuthUser, MaybeAuthUser};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /urls`
///
/// Anonymous callers are allowed; when a valid bearer token is presented
/// the link is attributed to the caller.
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/long/page",
///   "shortUrl": "http://localhost:3000/abc123",
///   "shortCode": "abc123"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is not a well-formed absolute
/// URL.
pub async fn create_link_handler(
    State(state): State<AppState>,
    MaybeAuthUser(identity): MaybeAuthUser,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create(payload.original_url, identity.map(|user| user.id))
        .await?;

    let short_url = state.link_service.full_short_url(&link.short_code);

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            original_url: link.original_url,
            short_url,
            short_code: link.short_code,
        }),
    ))
}

/// Lists the caller's live links, most recent first.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid bearer token.
pub async fn list_links_handler(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list(user.id).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Points one of the caller's links at a new destination.
///
/// # Endpoint
///
/// `PATCH /urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when the id does not name a live link owned by
/// the caller; foreign links are indistinguishable from missing ones.
pub async fn update_link_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .update(id, user.id, payload.original_url)
        .await?;

    Ok(Json(LinkResponse::from(link)))
}

/// Soft-deletes one of the caller's links.
///
/// # Endpoint
///
/// `DELETE /urls/{id}`
///
/// The row is kept with `deleted_at` set; the short code is never
/// reused.
///
/// # Errors
///
/// Returns 404 Not Found when the id does not name a live link owned by
/// the caller.
pub async fn delete_link_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<StatusCode, AppError> {
    state.link_service.remove(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
