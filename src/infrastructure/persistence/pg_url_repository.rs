//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Counter
/// increments are single-row atomic updates; no coordination happens in this
/// layer.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (short_code, original_url)
            VALUES ($1, $2)
            RETURNING short_code, original_url, fetch_count, created_at, updated_at, is_active
            "#,
        )
        .bind(&new_url.short_code)
        .bind(&new_url.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT short_code, original_url, fetch_count, created_at, updated_at, is_active
            FROM urls
            WHERE short_code = $1 AND is_active = TRUE
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        // The column is not unique; the oldest record wins when the
        // concurrent-create race has produced duplicates.
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT short_code, original_url, fetch_count, created_at, updated_at, is_active
            FROM urls
            WHERE original_url = $1 AND is_active = TRUE
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        // Inactive records still occupy their code, so no is_active filter.
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = $1)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn increment_fetch_count(&self, short_code: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE urls
            SET fetch_count = fetch_count + 1, updated_at = NOW()
            WHERE short_code = $1 AND is_active = TRUE
            "#,
        )
        .bind(short_code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
