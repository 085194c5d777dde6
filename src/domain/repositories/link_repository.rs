//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing short links.
///
/// Mutating operations (`update_original_url`, `soft_delete`) scope their
/// lookup by id AND owner in a single query, so a foreign link id is
/// indistinguishable from a nonexistent one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`; integration tests substitute
///   an in-memory fake (see `tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (including on soft-deleted rows). Returns [`AppError::Internal`]
    /// on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// The lookup spans soft-deleted rows: the code column is globally
    /// unique and deleted links keep resolving on the redirect path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists the owner's live links, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Link>, AppError>;

    /// Atomically increments the click counter by one.
    ///
    /// Returns the number of rows affected; zero means no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, id: Uuid) -> Result<u64, AppError>;

    /// Overwrites the destination of a live link owned by `owner_id`.
    ///
    /// Returns `Ok(None)` when no live row matches id + owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_original_url(
        &self,
        id: Uuid,
        owner_id: Uuid,
        original_url: &str,
    ) -> Result<Option<Link>, AppError>;

    /// Soft-deletes a live link owned by `owner_id` by setting
    /// `deleted_at = now()`.
    ///
    /// Returns `Ok(true)` if a row was marked, `Ok(false)` when no live
    /// row matches id + owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn soft_delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
}
