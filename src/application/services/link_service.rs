//! Link creation, lookup, mutation, and click accounting service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum regenerate-and-retry attempts on a short-code collision.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating and managing short links.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
    code_length: usize,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the externally visible prefix for short URLs;
    /// `code_length` is the fixed length of generated codes.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: String, code_length: usize) -> Self {
        Self {
            repository,
            base_url,
            code_length,
        }
    }

    /// Creates a short link for `original_url`, optionally owned.
    ///
    /// The URL is validated at the HTTP boundary before it reaches this
    /// method. A fresh code is generated per attempt; an insert rejected
    /// by the short-code unique constraint triggers a regenerate, bounded
    /// by [`MAX_CODE_ATTEMPTS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when every attempt collides or on
    /// database errors.
    pub async fn create(
        &self,
        original_url: String,
        owner: Option<Uuid>,
    ) -> Result<Link, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let short_code = generate_code(self.code_length);

            let new_link = NewLink {
                original_url: original_url.clone(),
                short_code,
                user_id: owner,
            };

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Lists the owner's live links, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<Link>, AppError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Looks up a link by its short code.
    ///
    /// The lookup spans soft-deleted rows: codes are never reused, and
    /// deleted links deliberately keep resolving on the public redirect
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches the code.
    pub async fn find_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))
    }

    /// Atomically bumps the click counter by one.
    ///
    /// An id that matches no row is logged and ignored; store failures
    /// propagate to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn increment_clicks(&self, id: Uuid) -> Result<(), AppError> {
        let affected = self.repository.increment_clicks(id).await?;

        if affected == 0 {
            warn!(link_id = %id, "No link row matched while incrementing clicks");
        }

        Ok(())
    }

    /// Points a link at a new destination.
    ///
    /// The lookup is scoped by id AND owner in one query, so mutating
    /// another user's link yields NotFound rather than Forbidden and does
    /// not reveal whether the row exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] unless a live link with that id
    /// belongs to `owner_id`.
    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        new_original_url: String,
    ) -> Result<Link, AppError> {
        self.repository
            .update_original_url(id, owner_id, &new_original_url)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": id })))
    }

    /// Soft-deletes a link, with the same ownership scoping as
    /// [`Self::update`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] unless a live link with that id
    /// belongs to `owner_id`.
    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        if !self.repository.soft_delete(id, owner_id).await? {
            return Err(AppError::not_found("URL not found", json!({ "id": id })));
        }

        Ok(())
    }

    /// Builds the public short URL for a code. Pure formatting, no store
    /// access.
    pub fn full_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
