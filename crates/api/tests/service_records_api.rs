//! HTTP-level tests for `/maintenance` and `/repair`, including
//! attachments and cascading file removal.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_multipart};
use serde_json::json;
use sqlx::SqlitePool;

async fn upload(app: axum::Router, name: &str, bytes: &[u8]) -> i64 {
    let response = post_multipart(app, "/files/upload", &[("userID", "sam")], Some((name, bytes))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_requires_reference_type(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = get(common::build_test_app(pool, dir.path()), "/maintenance?applianceId=1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required query parameter: referenceType");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_validates_scope_parameters(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response = get(app(), "/repair?referenceType=Space").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app(), "/repair?referenceType=Appliance").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app(), "/repair?referenceType=Appliance&applianceId=fridge").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid applianceId format");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_by_space_and_by_appliance(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    for body in [
        json!({"description": "Gutter clean", "date": "2024-04-01", "cost": 120.0,
               "referenceType": "Space", "spaceType": "Exterior"}),
        json!({"description": "Filter swap", "date": "2024-05-01", "cost": 35.5,
               "referenceType": "Appliance", "applianceId": 4}),
        json!({"description": "Coil clean", "date": "2024-06-01", "cost": 0.0,
               "referenceType": "Appliance", "applianceId": 5}),
    ] {
        let response = post_json(app(), "/maintenance/add", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let space = body_json(get(app(), "/maintenance?referenceType=Space&spaceType=Exterior").await).await;
    assert_eq!(space.as_array().unwrap().len(), 1);
    assert_eq!(space[0]["description"], "Gutter clean");

    let appliance =
        body_json(get(app(), "/maintenance?referenceType=Appliance&applianceId=4").await).await;
    assert_eq!(appliance.as_array().unwrap().len(), 1);
    assert_eq!(appliance[0]["cost"], 35.5);

    // Repairs live in their own table.
    let repairs = body_json(get(app(), "/repair?referenceType=Appliance&applianceId=4").await).await;
    assert!(repairs.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_attaches_listed_files_and_skips_unknown(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let file_id = upload(app(), "invoice.pdf", b"%PDF").await;

    let response = post_json(
        app(),
        "/repair/add",
        json!({"description": "Replace pump", "date": "2024-02-10", "cost": 240.0,
               "referenceType": "Appliance", "applianceId": 2,
               "attachmentIds": [file_id, 9999]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let repair_id = body_json(response).await["id"].as_i64().unwrap();

    let files = body_json(get(app(), &format!("/files/repair/{repair_id}")).await).await;
    assert_eq!(files.as_array().unwrap().len(), 1);
    assert_eq!(files[0]["id"], file_id);
    assert_eq!(files[0]["repairId"], repair_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_attached_files(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let file_id = upload(app(), "photo.jpg", b"jpeg bytes").await;
    let stored = dir.path().join("uploads").join(file_id.to_string());
    assert!(stored.exists());

    let response = post_json(
        app(),
        "/maintenance/add",
        json!({"description": "Service boiler", "date": "2024-09-09", "cost": 90.0,
               "referenceType": "Space", "spaceType": "Utility", "attachmentIds": [file_id]}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete(app(), &format!("/maintenance/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(!stored.exists());
    assert_eq!(
        get(app(), &format!("/files/info/{file_id}")).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(app(), &format!("/maintenance/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_missing_record_returns_404(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = delete(common::build_test_app(pool, dir.path()), "/repair/delete/77").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
