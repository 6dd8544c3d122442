mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use linkvault::api::handlers::{delete_handler, resolve_handler, update_handler};
use serde_json::json;
use sqlx::PgPool;

fn server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route(
            "/shorten/{code}",
            get(resolve_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_resolve_counts_hits(pool: PgPool) {
    common::create_test_mapping(&pool, "res00001", "https://example.com").await;
    let server = server(pool.clone());

    let first = server.get("/shorten/res00001").await;
    first.assert_status_ok();
    let json = first.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["shortCode"], "res00001");
    assert_eq!(json["accessCount"], 1);

    let second = server.get("/shorten/res00001").await;
    assert_eq!(second.json::<serde_json::Value>()["accessCount"], 2);

    assert_eq!(common::get_access_count(&pool, "res00001").await, 2);
}

#[sqlx::test]
async fn test_resolve_not_found(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/shorten/missing1").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "missing1");
}

#[sqlx::test]
async fn test_update_success(pool: PgPool) {
    common::create_test_mapping(&pool, "upd00001", "https://before.com").await;
    common::set_access_count(&pool, "upd00001", 5).await;
    let server = server(pool);

    let response = server
        .put("/shorten/upd00001")
        .json(&json!({ "url": "https://after.com/new" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://after.com/new");
    assert_eq!(json["shortCode"], "upd00001");
    assert_eq!(json["accessCount"], 5);
    assert_ne!(json["createdAt"], json["updatedAt"]);
}

#[sqlx::test]
async fn test_update_invalid_url(pool: PgPool) {
    common::create_test_mapping(&pool, "upd00002", "https://before.com").await;
    let server = server(pool.clone());

    let response = server
        .put("/shorten/upd00002")
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let stored: String =
        sqlx::query_scalar("SELECT original_url FROM urls WHERE short_code = $1")
            .bind("upd00002")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "https://before.com");
}

#[sqlx::test]
async fn test_update_not_found(pool: PgPool) {
    let server = server(pool);

    let response = server
        .put("/shorten/missing1")
        .json(&json!({ "url": "https://after.com" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_success_then_not_found(pool: PgPool) {
    common::create_test_mapping(&pool, "del00001", "https://example.com").await;
    let server = server(pool);

    let response = server.delete("/shorten/del00001").await;
    response.assert_status(StatusCode::NO_CONTENT);

    server
        .get("/shorten/del00001")
        .await
        .assert_status_not_found();
    server
        .delete("/shorten/del00001")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_update_rejects_embedded_control_characters(pool: PgPool) {
    common::create_test_mapping(&pool, "upd00003", "https://before.com").await;
    let server = server(pool.clone());

    let response = server
        .put("/shorten/upd00003")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "invalid_url"
    );

    let stored: String =
        sqlx::query_scalar("SELECT original_url FROM urls WHERE short_code = $1")
            .bind("upd00003")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "https://before.com");
}

#[sqlx::test]
async fn test_update_null_or_non_string_url(pool: PgPool) {
    common::create_test_mapping(&pool, "upd00004", "https://before.com").await;
    let server = server(pool);

    for body in [json!({ "url": null }), json!({ "url": 42 })] {
        let response = server.put("/shorten/upd00004").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "invalid_url"
        );
    }
}
