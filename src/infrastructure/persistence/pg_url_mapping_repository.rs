//! PostgreSQL implementation of the url mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

const SELECT_COLUMNS: &str =
    "SELECT id, original_url, short_code, created_at, updated_at, access_count FROM urls";

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    access_count: i64,
}

impl From<UrlRow> for UrlMapping {
    fn from(r: UrlRow) -> Self {
        UrlMapping::new(
            r.id,
            r.original_url,
            r.short_code,
            r.created_at,
            r.updated_at,
            r.access_count,
        )
    }
}

/// PostgreSQL repository for url mappings.
///
/// Every method borrows one connection from the shared pool for the duration of
/// a single statement. Uniqueness is enforced by the `urls_short_code_key`
/// constraint and counter updates are single `UPDATE ... RETURNING` statements.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO urls (original_url, short_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_code)
        .bind(new_mapping.created_at)
        .bind(new_mapping.updated_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!("{SELECT_COLUMNS} WHERE short_code = $1"))
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn list_all(&self, limit: Option<i64>) -> Result<Vec<UrlMapping>, AppError> {
        // LIMIT NULL is LIMIT ALL in PostgreSQL.
        let rows = sqlx::query_as::<_, UrlRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn increment_access_count(&self, id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE urls
            SET access_count = access_count + 1
            WHERE id = $1
            RETURNING access_count
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        count.ok_or_else(|| {
            AppError::not_found("Short URL not found", serde_json::json!({ "id": id }))
        })
    }

    async fn update_url(
        &self,
        short_code: &str,
        new_url: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET original_url = $2,
                updated_at = GREATEST($3, updated_at + INTERVAL '1 microsecond')
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .bind(new_url)
        .bind(updated_at)
        .execute(self.pool.as_ref())
        .await?;

        match result.rows_affected() {
            0 => Err(AppError::short_code_not_found(short_code)),
            n => Ok(n),
        }
    }

    async fn delete(&self, short_code: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = $1")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        match result.rows_affected() {
            0 => Err(AppError::short_code_not_found(short_code)),
            n => Ok(n),
        }
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn sum_access_counts(&self) -> Result<i64, AppError> {
        let sum = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(access_count), 0)::BIGINT FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(sum)
    }
}
