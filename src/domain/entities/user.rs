//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// A registered account.
///
/// `password_hash` is an Argon2 PHC string and must never be serialized
/// outward; handlers expose users only through redacted DTOs.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Checks a candidate password against the stored Argon2 hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored hash is not a valid
    /// PHC string.
    pub fn verify_password(&self, password: &str) -> Result<bool, AppError> {
        use argon2::{Argon2, PasswordHash, PasswordVerifier};

        let parsed_hash = PasswordHash::new(&self.password_hash).map_err(|e| {
            AppError::internal(
                "Stored password hash is invalid",
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Input data for creating a new user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::user_service::hash_password;

    fn test_user(password_hash: String) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash,
            name: "Test User".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_verify_password_roundtrip() {
        let user = test_user(hash_password("secret1").unwrap());

        assert!(user.verify_password("secret1").unwrap());
        assert!(!user.verify_password("secret2").unwrap());
    }

    #[test]
    fn test_verify_password_rejects_corrupt_hash() {
        let user = test_user("not-a-phc-string".to_string());

        assert!(matches!(
            user.verify_password("secret1"),
            Err(AppError::Internal { .. })
        ));
    }
}
