#![allow(dead_code)]

use chrono::{DateTime, Utc};
use linkvault::application::services::ShortenerService;
use linkvault::infrastructure::persistence::PgUrlMappingRepository;
use linkvault::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_mapping(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_code, created_at, updated_at) VALUES ($1, $2, NOW(), NOW()) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_mapping_at(
    pool: &PgPool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_code, created_at, updated_at) VALUES ($1, $2, $3, $3) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_access_count(pool: &PgPool, code: &str, count: i64) {
    sqlx::query("UPDATE urls SET access_count = $2 WHERE short_code = $1")
        .bind(code)
        .bind(count)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_access_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT access_count FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool) -> Arc<ShortenerService<PgUrlMappingRepository>> {
    let repository = Arc::new(PgUrlMappingRepository::new(Arc::new(pool)));
    Arc::new(ShortenerService::new(repository))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool))
}
