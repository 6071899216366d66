//! Integration tests for the greeting, health check and general HTTP
//! behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, get};
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn root_returns_greeting(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = get(common::build_test_app(pool, dir.path()), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Hello, World");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_reports_database_ok(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = get(common::build_test_app(pool, dir.path()), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db"], "ok");
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_fails_when_database_is_closed(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    pool.close().await;

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["db"].as_str().unwrap().starts_with("error: "));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = get(common::build_test_app(pool, dir.path()), "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = get(common::build_test_app(pool, dir.path()), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_allows_any_origin_by_default(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/appliances")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
