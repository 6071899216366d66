//! HTTP-level tests for appliances, todos and notes.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_multipart, put_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Appliances
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn appliance_crud_round(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response = post_json(
        app(),
        "/appliances/add",
        json!({
            "applianceName": "Dishwasher",
            "manufacturer": "Bosch",
            "modelNumber": "SHX878",
            "serialNumber": "FD9901",
            "yearPurchased": "2021",
            "purchasePrice": "899.00",
            "location": "Kitchen",
            "type": "Appliance"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["applianceName"], "Dishwasher");
    assert_eq!(created["type"], "Appliance");

    let response = get(app(), &format!("/appliances/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["manufacturer"], "Bosch");

    // Full replacement: omitted fields are cleared.
    let response = put_json(
        app(),
        &format!("/appliances/update/{id}"),
        json!({"applianceName": "Dishwasher (old)", "location": "Garage"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["applianceName"], "Dishwasher (old)");
    assert_eq!(updated["location"], "Garage");
    assert_eq!(updated["manufacturer"], "");

    let list = body_json(get(app(), "/appliances").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let response = delete(app(), &format!("/appliances/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app(), &format!("/appliances/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_appliance_update_and_delete_return_404(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response = put_json(app(), "/appliances/update/999", json!({"applianceName": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app(), "/appliances/delete/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn appliance_delete_leaves_linked_rows(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let appliance = body_json(
        post_json(app(), "/appliances/add", json!({"applianceName": "Water heater"})).await,
    )
    .await;
    let id = appliance["id"].as_i64().unwrap();

    post_json(
        app(),
        "/todo/add",
        json!({"label": "Flush tank", "userid": "sam", "applianceId": id}),
    )
    .await;
    post_json(
        app(),
        "/notes/add",
        json!({"title": "Anode", "body": "Replaced 2024", "applianceId": id}),
    )
    .await;
    post_json(
        app(),
        "/maintenance/add",
        json!({"description": "Flush", "date": "2025-03-01", "cost": 0.0,
               "referenceType": "Appliance", "applianceId": id}),
    )
    .await;
    let upload = body_json(
        post_multipart(
            app(),
            "/files/upload",
            &[("userID", "sam")],
            Some(("manual.pdf", b"%PDF".as_slice())),
        )
        .await,
    )
    .await;
    let response = post_json(
        app(),
        "/files/attach",
        json!({"fileId": upload["id"], "applianceId": id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app(), &format!("/appliances/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let todos = body_json(get(app(), &format!("/todo?applianceId={id}")).await).await;
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["applianceId"], id);

    let notes = body_json(get(app(), &format!("/notes?applianceId={id}")).await).await;
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["applianceId"], id);

    let records = body_json(
        get(app(), &format!("/maintenance?referenceType=Appliance&applianceId={id}")).await,
    )
    .await;
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["applianceId"], id);

    let files = body_json(get(app(), &format!("/files/appliance/{id}")).await).await;
    assert_eq!(files.as_array().unwrap().len(), 1);
    assert_eq!(files[0]["applianceId"], id);

    let response = get(app(), &format!("/files/download/{}", upload["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_id_is_rejected(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = get(common::build_test_app(pool, dir.path()), "/appliances/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn todo_filters_and_toggle(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response = post_json(
        app(),
        "/todo/add",
        json!({"label": "Descale", "userid": "sam", "applianceId": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let scoped = body_json(response).await;
    assert_eq!(scoped["userid"], "sam");
    assert_eq!(scoped["checked"], false);
    assert_eq!(scoped["applianceId"], 3);

    let response = post_json(
        app(),
        "/todo/add",
        json!({"label": "Sweep", "userid": "sam", "applianceId": 0, "spaceType": "Garage"}),
    )
    .await;
    let garage = body_json(response).await;
    assert!(garage["applianceId"].is_null());

    let all = body_json(get(app(), "/todo").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let by_appliance = body_json(get(app(), "/todo?applianceId=3").await).await;
    assert_eq!(by_appliance.as_array().unwrap().len(), 1);
    assert_eq!(by_appliance[0]["label"], "Descale");

    let by_space = body_json(get(app(), "/todo?applianceId=&spaceType=Garage").await).await;
    assert_eq!(by_space.as_array().unwrap().len(), 1);
    assert_eq!(by_space[0]["label"], "Sweep");

    let both = body_json(get(app(), "/todo?applianceId=3&spaceType=Garage").await).await;
    assert!(both.as_array().unwrap().is_empty());

    let id = scoped["id"].as_i64().unwrap();
    let response = put_json(app(), &format!("/todo/update/{id}"), json!({"checked": true})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let toggled = body_json(response).await;
    assert_eq!(toggled["checked"], true);
    assert_eq!(toggled["label"], "Descale");

    let response = delete(app(), &format!("/todo/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(app(), &format!("/todo/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn todo_list_rejects_garbage_appliance_id(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = get(common::build_test_app(pool, dir.path()), "/todo?applianceId=kitchen").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn todo_update_requires_checked(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let response = put_json(
        common::build_test_app(pool, dir.path()),
        "/todo/update/1",
        json!({"label": "nope"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn note_crud_keeps_scope_on_edit(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let app = || common::build_test_app(pool.clone(), dir.path());

    let response = post_json(
        app(),
        "/notes/add",
        json!({"title": "Paint", "body": "Eggshell white", "spaceType": "Hallway"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json(
        app(),
        &format!("/notes/update/{id}"),
        json!({"title": "Paint colour", "body": "Satin white"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Paint colour");
    assert_eq!(updated["spaceType"], "Hallway");

    let hallway = body_json(get(app(), "/notes?spaceType=Hallway").await).await;
    assert_eq!(hallway.as_array().unwrap().len(), 1);
    let kitchen = body_json(get(app(), "/notes?spaceType=Kitchen").await).await;
    assert!(kitchen.as_array().unwrap().is_empty());

    let response = get(app(), &format!("/notes/{id}")).await;
    assert_eq!(body_json(response).await["body"], "Satin white");

    assert_eq!(
        delete(app(), &format!("/notes/delete/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        get(app(), &format!("/notes/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}
