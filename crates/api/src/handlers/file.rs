//! Handlers for the `/files` resource: uploads, downloads and attachments.

use std::path::Path as FsPath;

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::saved_file::{AttachFile, CreateSavedFile, SavedFile};
use homelogger_db::models::service_record::ServiceKind;
use homelogger_db::repositories::SavedFileRepo;
use serde::Serialize;
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::storage;

/// Response body of a successful upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub id: DbId,
    pub original_name: String,
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// POST /files/upload
///
/// Multipart fields: `file` (required), `userID` (required), `spaceType`
/// (optional). The row is inserted first so its id can name the file on
/// disk.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut user_id = String::new();
    let mut space_type = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            "userID" => {
                user_id = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "spaceType" => {
                space_type = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    let (original_name, data) = match file_data {
        Some(file) if !user_id.is_empty() => file,
        _ => return Err(AppError::BadRequest("Missing file or userID".into())),
    };

    let input = CreateSavedFile {
        original_name,
        user_id,
        space_type: Some(space_type),
    };
    let saved = SavedFileRepo::create(&state.pool, &input).await?;

    let path = match storage::write(&state.config.uploads_dir, saved.id, &data).await {
        Ok(path) => path,
        Err(e) => {
            SavedFileRepo::delete(&state.pool, saved.id).await?;
            return Err(e.into());
        }
    };
    SavedFileRepo::set_path(&state.pool, saved.id, &path.to_string_lossy()).await?;

    tracing::info!(
        file_id = saved.id,
        bytes = data.len(),
        original_name = %saved.original_name,
        "File uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            id: saved.id,
            original_name: saved.original_name,
            user_id: saved.user_id,
        }),
    ))
}

/// GET /files/info/{id}
pub async fn info(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<SavedFile>> {
    let file = find_file(&state, id).await?;
    Ok(Json(file))
}

/// GET /files/download/{id}
///
/// Streams the stored bytes under the original file name. A row whose bytes
/// are gone is reported as not found.
pub async fn download(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let file = find_file(&state, id).await?;

    let handle = match tokio::fs::File::open(&file.path).await {
        Ok(handle) => handle,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(file_id = id, path = %file.path, "Stored file missing on disk");
            return Err(AppError::Core(CoreError::NotFound { entity: "File", id }));
        }
        Err(e) => return Err(e.into()),
    };

    let body = Body::from_stream(ReaderStream::new(handle));
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                storage::attachment_disposition(&file.original_name),
            ),
        ],
        body,
    )
        .into_response())
}

/// GET /files/maintenance/{id}
pub async fn list_for_maintenance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<SavedFile>>> {
    let files = SavedFileRepo::list_for_record(&state.pool, ServiceKind::Maintenance, id).await?;
    Ok(Json(files))
}

/// GET /files/repair/{id}
pub async fn list_for_repair(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<SavedFile>>> {
    let files = SavedFileRepo::list_for_record(&state.pool, ServiceKind::Repair, id).await?;
    Ok(Json(files))
}

/// GET /files/appliance/{id}
pub async fn list_for_appliance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<SavedFile>>> {
    let files = SavedFileRepo::list_for_appliance(&state.pool, id).await?;
    Ok(Json(files))
}

/// GET /files/space/{space_type}
pub async fn list_for_space(
    State(state): State<AppState>,
    Path(space_type): Path<String>,
) -> AppResult<Json<Vec<SavedFile>>> {
    let files = SavedFileRepo::list_for_space(&state.pool, &space_type).await?;
    Ok(Json(files))
}

/// POST /files/attach
///
/// Sets every link given with a non-zero id or non-empty space type.
pub async fn attach(
    State(state): State<AppState>,
    Json(input): Json<AttachFile>,
) -> AppResult<StatusCode> {
    let file_id = input.file_id;
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "File",
            id: file_id,
        })
    };
    find_file(&state, file_id).await?;

    let pool = &state.pool;
    if let Some(maintenance_id) = input.maintenance_id.filter(|id| *id != 0) {
        if !SavedFileRepo::attach_to_record(pool, ServiceKind::Maintenance, file_id, maintenance_id)
            .await?
        {
            return Err(not_found());
        }
    }
    if let Some(repair_id) = input.repair_id.filter(|id| *id != 0) {
        if !SavedFileRepo::attach_to_record(pool, ServiceKind::Repair, file_id, repair_id).await? {
            return Err(not_found());
        }
    }
    if let Some(appliance_id) = input.appliance_id.filter(|id| *id != 0) {
        if !SavedFileRepo::attach_to_appliance(pool, file_id, appliance_id).await? {
            return Err(not_found());
        }
    }
    if let Some(space_type) = input.space_type.as_deref().filter(|s| !s.is_empty()) {
        if !SavedFileRepo::attach_to_space(pool, file_id, space_type).await? {
            return Err(not_found());
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /files/{id}
///
/// Removes the bytes (already missing is fine), then the row.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let file = find_file(&state, id).await?;
    storage::remove(FsPath::new(&file.path)).await?;
    SavedFileRepo::delete(&state.pool, id).await?;
    tracing::info!(file_id = id, "File deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_file(state: &AppState, id: DbId) -> AppResult<SavedFile> {
    SavedFileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "File", id }))
}
