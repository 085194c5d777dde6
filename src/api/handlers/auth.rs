//! Handlers for registration and login endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and logs it in.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Response
///
/// ```json
/// {
///   "access_token": "<jwt>",
///   "user": { "id": "...", "email": "...", "name": "..." }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure and 409 Conflict when
/// the email is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create(payload.name, payload.email, payload.password)
        .await?;

    let access_token = state.auth_service.login(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            user: UserProfile::from(&user),
        }),
    ))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 401 Unauthorized on an unknown email or a password mismatch;
/// the two cases are indistinguishable in the response.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .validate_credentials(&payload.email, &payload.password)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials", json!({})))?;

    let access_token = state.auth_service.login(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            user: UserProfile::from(&user),
        }),
    ))
}
