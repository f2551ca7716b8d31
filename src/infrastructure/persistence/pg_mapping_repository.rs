//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Key uniqueness is enforced by the primary key on `url_mappings.key`;
/// concurrent inserts of the same key are resolved with
/// `ON CONFLICT DO NOTHING`, so at most one writer wins and the rest see
/// [`InsertOutcome::AlreadyExists`]. Timeouts and connection failures
/// surface as [`AppError::StorageUnavailable`] without retry.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn mapping_from_row(row: &sqlx::postgres::PgRow) -> Result<UrlMapping, AppError> {
    Ok(UrlMapping::new(
        row.try_get("key").map_err(map_sqlx_error)?,
        row.try_get("original_url").map_err(map_sqlx_error)?,
        row.try_get::<DateTime<Utc>, _>("created_at")
            .map_err(map_sqlx_error)?,
    ))
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT key, original_url, created_at
            FROM url_mappings
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(mapping_from_row).transpose()
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<InsertOutcome, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO url_mappings (key, original_url)
            VALUES ($1, $2)
            ON CONFLICT (key) DO NOTHING
            RETURNING key, original_url, created_at
            "#,
        )
        .bind(&new_mapping.key)
        .bind(&new_mapping.original_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(row) => Ok(InsertOutcome::Inserted(mapping_from_row(&row)?)),
            None => Ok(InsertOutcome::AlreadyExists),
        }
    }

    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))
    }
}
