//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::note::{CreateNote, Note, NoteFilter, UpdateNote};
use homelogger_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ApiQuery, ScopeParams};
use crate::state::AppState;

/// GET /notes?applianceId=&spaceType=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ScopeParams>,
) -> AppResult<Json<Vec<Note>>> {
    let filter = NoteFilter {
        appliance_id: params.appliance_id(),
        space_type: params.space_type(),
    };
    let notes = NoteRepo::list(&state.pool, &filter).await?;
    Ok(Json(notes))
}

/// POST /notes/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    let note = NoteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(note))
}

/// PUT /notes/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(note))
}

/// DELETE /notes/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Note", id }))
    }
}
