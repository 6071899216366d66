//! Handlers shared by the `/maintenance` and `/repair` resources.
//!
//! Every handler takes the [`ServiceKind`] it serves as its first argument;
//! the routes bind it per resource.

use std::path::Path as FsPath;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::reference::resolve_scope;
use homelogger_core::types::DbId;
use homelogger_db::models::service_record::{CreateServiceRecord, ServiceKind, ServiceRecord};
use homelogger_db::repositories::{SavedFileRepo, ServiceRecordRepo};

use crate::error::{AppError, AppResult};
use crate::query::{ApiQuery, ReferenceParams};
use crate::state::AppState;
use crate::storage;

/// GET /{maintenance,repair}?referenceType=&applianceId=&spaceType=
pub async fn list(
    kind: ServiceKind,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ReferenceParams>,
) -> AppResult<Json<Vec<ServiceRecord>>> {
    let scope = resolve_scope(
        params.reference_type.as_deref(),
        params.appliance_id.as_deref(),
        params.space_type.as_deref(),
    )?;
    let records = ServiceRecordRepo::list_by_scope(&state.pool, kind, &scope).await?;
    Ok(Json(records))
}

/// POST /{maintenance,repair}/add
///
/// Files named in `attachmentIds` are linked to the new record. A file that
/// cannot be attached is logged and skipped.
pub async fn create(
    kind: ServiceKind,
    State(state): State<AppState>,
    Json(input): Json<CreateServiceRecord>,
) -> AppResult<(StatusCode, Json<ServiceRecord>)> {
    let record = ServiceRecordRepo::create(&state.pool, kind, &input).await?;

    for &file_id in &input.attachment_ids {
        match SavedFileRepo::attach_to_record(&state.pool, kind, file_id, record.id).await {
            Ok(true) => {}
            Ok(false) => tracing::warn!(
                kind = kind.entity(),
                record_id = record.id,
                file_id,
                "Attachment not found, skipping"
            ),
            Err(e) => tracing::warn!(
                kind = kind.entity(),
                record_id = record.id,
                file_id,
                error = %e,
                "Failed to attach file"
            ),
        }
    }

    tracing::info!(kind = kind.entity(), record_id = record.id, "Service record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /{maintenance,repair}/{id}
pub async fn get_by_id(
    kind: ServiceKind,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceRecord>> {
    let record = ServiceRecordRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))?;
    Ok(Json(record))
}

/// DELETE /{maintenance,repair}/delete/{id}
///
/// Attached files go first: bytes on disk, then their rows.
pub async fn delete(
    kind: ServiceKind,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ServiceRecordRepo::find_by_id(&state.pool, kind, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }));
    }

    let files = SavedFileRepo::list_for_record(&state.pool, kind, id).await?;
    for file in &files {
        storage::remove(FsPath::new(&file.path)).await?;
        SavedFileRepo::delete(&state.pool, file.id).await?;
    }

    ServiceRecordRepo::delete(&state.pool, kind, id).await?;
    tracing::info!(
        kind = kind.entity(),
        record_id = id,
        files_removed = files.len(),
        "Service record deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
