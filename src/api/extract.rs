//! Identity extraction from bearer tokens.
//!
//! Two extractors replace hidden request-context mutation with explicit
//! argument threading: [`AuthUser`] rejects unauthenticated requests with
//! 401, [`MaybeAuthUser`] attaches the identity when present and proceeds
//! anonymously otherwise. Handlers receive the resulting identity as a
//! plain argument and pass it into service calls.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_auth::AuthBearer;
use serde_json::json;
use std::convert::Infallible;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Verified caller identity, rebuilt from token claims without a
/// database round trip.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Authorization header is missing or invalid" }),
                )
            })?;

        let claims = state.auth_service.verify_token(&token)?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}

/// Optional caller identity: `None` when no valid bearer token is
/// presented.
///
/// Invalid tokens degrade to anonymous instead of rejecting, so the
/// create-link endpoint accepts both logged-in and anonymous callers.
#[derive(Debug, Clone, Default)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}
