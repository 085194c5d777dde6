//! DTOs for link management endpoints.
//!
//! Link-facing JSON uses camelCase field names (`originalUrl`,
//! `shortCode`, ...), matching the public wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to shorten (must be an absolute http/https URL).
    #[serde(rename = "originalUrl")]
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,
}

/// Request to point an existing link at a new destination.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[serde(rename = "originalUrl")]
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,
}

/// Response for a freshly created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
}

/// Full JSON representation of a link record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            clicks: link.clicks,
            user_id: link.user_id,
            created_at: link.created_at,
            updated_at: link.updated_at,
            deleted_at: link.deleted_at,
        }
    }
}
