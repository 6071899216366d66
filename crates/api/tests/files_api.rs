//! HTTP-level tests for uploads, downloads and attachments.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, post_json, post_multipart};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_then_download(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response = post_multipart(
        app(),
        "/files/upload",
        &[("userID", "sam"), ("spaceType", "Kitchen")],
        Some(("manual.pdf", b"owner's manual".as_slice())),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["originalName"], "manual.pdf");
    assert_eq!(created["userID"], "sam");

    let stored = dir.path().join("uploads").join(id.to_string());
    assert_eq!(std::fs::read(&stored).unwrap(), b"owner's manual");

    let info = body_json(get(app(), &format!("/files/info/{id}")).await).await;
    assert_eq!(info["path"], stored.to_string_lossy().as_ref());
    assert_eq!(info["spaceType"], "Kitchen");

    let response = get(app(), &format!("/files/download/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"manual.pdf\""
    );
    assert_eq!(body_bytes(response).await, b"owner's manual");

    let by_space = body_json(get(app(), "/files/space/Kitchen").await).await;
    assert_eq!(by_space.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_requires_file_and_user(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response = post_multipart(app(), "/files/upload", &[("userID", "sam")], None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_multipart(app(), "/files/upload", &[], Some(("a.txt", b"a".as_slice()))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing file or userID");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn attach_sets_each_given_link(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response =
        post_multipart(app(), "/files/upload", &[("userID", "sam")], Some(("w.pdf", b"w".as_slice()))).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json(
        app(),
        "/files/attach",
        json!({"fileId": id, "applianceId": 8, "maintenanceId": 0, "spaceType": "Garage"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let info = body_json(get(app(), &format!("/files/info/{id}")).await).await;
    assert_eq!(info["applianceId"], 8);
    assert_eq!(info["spaceType"], "Garage");
    assert!(info["maintenanceId"].is_null());

    let by_appliance = body_json(get(app(), "/files/appliance/8").await).await;
    assert_eq!(by_appliance.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn attach_unknown_file_returns_404(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        common::build_test_app(pool, dir.path()),
        "/files/attach",
        json!({"fileId": 404, "applianceId": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_bytes_and_row(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response =
        post_multipart(app(), "/files/upload", &[("userID", "sam")], Some(("r.png", b"png".as_slice()))).await;
    let id = body_json(response).await["id"].as_i64().unwrap();
    let stored = dir.path().join("uploads").join(id.to_string());

    assert_eq!(delete(app(), &format!("/files/{id}")).await.status(), StatusCode::NO_CONTENT);
    assert!(!stored.exists());
    assert_eq!(
        get(app(), &format!("/files/info/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(delete(app(), &format!("/files/{id}")).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_tolerates_bytes_already_gone(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response =
        post_multipart(app(), "/files/upload", &[("userID", "sam")], Some(("r.png", b"png".as_slice()))).await;
    let id = body_json(response).await["id"].as_i64().unwrap();
    std::fs::remove_file(dir.path().join("uploads").join(id.to_string())).unwrap();

    assert_eq!(
        get(app(), &format!("/files/download/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(delete(app(), &format!("/files/{id}")).await.status(), StatusCode::NO_CONTENT);
}
