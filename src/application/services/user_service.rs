//! User account creation and lookup service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering and looking up user accounts.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new account.
    ///
    /// The password is Argon2-hashed before it reaches the store. The
    /// email pre-check keeps the common duplicate path cheap; the store's
    /// unique constraint still backs it under concurrent registration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn create(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": email }),
            ));
        }

        let password_hash = hash_password(&password)?;

        let user = self
            .repository
            .insert(NewUser {
                email,
                password_hash,
                name,
            })
            .await?;

        info!(user_id = %user.id, "New user registered");

        Ok(user)
    }

    /// Looks up a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.repository.find_by_email(email).await
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches the id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }
}

/// Hashes a password with Argon2id and a fresh random salt, producing a
/// PHC string.
pub(crate) fn hash_password(password: &str) -> Result<String, AppError> {
    use argon2::password_hash::{SaltString, rand_core::OsRng};
    use argon2::{Argon2, PasswordHasher};

    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            AppError::internal(
                "Failed to hash password",
                json!({ "reason": e.to_string() }),
            )
        })?
        .to_string())
}
