//! Authentication service: credential validation and bearer token
//! issuance.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::application::services::UserService;
use crate::domain::entities::User;
use crate::error::AppError;

/// Claims embedded in every issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Uuid,
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Service for validating credentials and minting/verifying bearer tokens.
///
/// Tokens are HS256-signed with the configured secret and carry the user
/// id and email; request identity is rebuilt from verified claims without
/// a database round trip.
pub struct AuthService {
    users: Arc<UserService>,
    jwt_secret: String,
    token_expiry_hours: u64,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(users: Arc<UserService>, jwt_secret: String, token_expiry_hours: u64) -> Self {
        Self {
            users,
            jwt_secret,
            token_expiry_hours,
        }
    }

    /// Checks an email/password pair against stored credentials.
    ///
    /// Returns `None` for an unknown email without invoking the password
    /// hasher, and `None` on a hash mismatch; callers translate `None`
    /// into an Unauthorized response so the two cases are
    /// indistinguishable to clients.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database or hash-parsing errors.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };

        if !user.verify_password(password)? {
            warn!(email, "Failed login attempt");
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Issues a signed bearer token for the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if token signing fails.
    pub fn login(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_expiry_hours as i64)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            AppError::internal("Failed to sign token", json!({ "reason": e.to_string() }))
        })
    }

    /// Verifies a bearer token's signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on any malformed, tampered, or
    /// expired token.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            warn!(error = %e, "Token verification failed");
            AppError::unauthorized("Invalid or expired token", json!({}))
        })
    }
}
