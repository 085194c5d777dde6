//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

/// PostgreSQL repository for link storage and retrieval.
///
/// The click counter is maintained with the store's native atomic
/// increment (`SET clicks = clicks + 1`); no application-level locking.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: Uuid,
    original_url: String,
    short_code: String,
    clicks: i64,
    user_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            clicks: row.clicks,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO urls (original_url, short_code, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_code, clicks, user_id,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(new_link.user_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "urls_short_code_key") {
                AppError::conflict(
                    "Short code already exists",
                    json!({ "code": new_link.short_code }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        // Deliberately no deleted_at filter: the code column is globally
        // unique and deleted links keep resolving on the redirect path.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, clicks, user_id,
                   created_at, updated_at, deleted_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, clicks, user_id,
                   created_at, updated_at, deleted_at
            FROM urls
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn update_original_url(
        &self,
        id: Uuid,
        owner_id: Uuid,
        original_url: &str,
    ) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE urls
            SET original_url = $3, updated_at = now()
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            RETURNING id, original_url, short_code, clicks, user_id,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn soft_delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET deleted_at = now(), updated_at = now()
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
