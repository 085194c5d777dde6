//! Handler for user profile lookup.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::api::dto::users::UserResponse;
use crate::api::extract::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the public profile of a user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid bearer token and 404 Not
/// Found for an unknown id.
pub async fn get_user_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_by_id(id).await?;

    Ok(Json(UserResponse::from(&user)))
}
