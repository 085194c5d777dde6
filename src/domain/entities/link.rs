//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL with its click counter and optional owner.
///
/// `short_code` is globally unique across live and soft-deleted rows;
/// codes are never reused. A link with a non-null `deleted_at` is absent
/// from listings and owner mutations.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    /// Anonymous links have no owner.
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input data for creating a new link row. Clicks start at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
    pub user_id: Option<Uuid>,
}
