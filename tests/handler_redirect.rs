mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shortlinks::api::handlers::{redirect_handler, shorten_handler};
use sqlx::SqlitePool;
use std::sync::Arc;

fn test_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_link(&pool, "redirect1", "https://example.com/target").await;

    let server = test_app(pool);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_clicks(pool: SqlitePool) {
    common::create_test_link(&pool, "counted1", "https://example.com").await;

    let server = test_app(pool.clone());

    for _ in 0..3 {
        let response = server.get("/counted1").await;
        assert_eq!(response.status_code(), 302);
    }

    assert_eq!(common::link_clicks(&pool, "counted1").await, 3);
}

#[sqlx::test]
async fn test_concurrent_redirects_count_every_click(pool: SqlitePool) {
    common::create_test_link(&pool, "busy1", "https://example.com").await;

    let server = Arc::new(test_app(pool.clone()));

    let mut handles = Vec::new();
    for _ in 0..20 {
        let server = server.clone();
        handles.push(tokio::spawn(
            async move { server.get("/busy1").await.status_code() },
        ));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 302);
    }

    assert_eq!(common::link_clicks(&pool, "busy1").await, 20);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    common::create_test_link(&pool, "other1", "https://example.com").await;

    let server = test_app(pool.clone());

    let response = server.get("/nope99").await;

    response.assert_status_not_found();

    let body = response.text();
    assert!(body.contains("404"));
    assert!(body.contains("nope99"));

    // A miss must not touch stored links
    assert_eq!(common::link_clicks(&pool, "other1").await, 0);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_then_redirect_roundtrip(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let url = "https://example.com/a/b?x=1";
    let created = server.post("/api/shorten").json(&json!({ "url": url })).await;

    created.assert_status_ok();
    let code = created.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(code.len(), 6);

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), url);
}

#[sqlx::test]
async fn test_redirect_location_is_verbatim(pool: SqlitePool) {
    let url = "https://example.com/path?q=hello%20world&x=1#section";
    common::create_test_link(&pool, "exact1", url).await;

    let server = test_app(pool);

    let response = server.get("/exact1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), url);
}
