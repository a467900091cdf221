#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortlinks::application::services::LinkService;
use shortlinks::infrastructure::persistence::SqliteLinkRepository;
use shortlinks::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO links (short_code, original_url, created_at, clicks) VALUES (?1, ?2, ?3, 0)",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_link_at(pool: &SqlitePool, code: &str, url: &str, at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO links (short_code, original_url, created_at, clicks) VALUES (?1, ?2, ?3, 0)",
    )
    .bind(code)
    .bind(url)
    .bind(at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_link_with_clicks(pool: &SqlitePool, code: &str, url: &str, clicks: i64) {
    sqlx::query(
        "INSERT INTO links (short_code, original_url, created_at, clicks) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now())
    .bind(clicks)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn link_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(link_repository));

    AppState::new(link_service, TEST_BASE_URL.to_string())
}
