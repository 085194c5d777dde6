//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`; integration tests substitute
///   an in-memory fake (see `tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by email. Emails are matched exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
}
