//! Handlers for the `/recurring` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::recurring_task::{RecurringTask, RecurringTaskInput};
use homelogger_db::repositories::RecurringTaskRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /recurring
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RecurringTask>>> {
    let tasks = RecurringTaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// POST /recurring/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RecurringTaskInput>,
) -> AppResult<(StatusCode, Json<RecurringTask>)> {
    let task = RecurringTaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, "Recurring task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /recurring/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecurringTask>> {
    let task = RecurringTaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RecurringTask",
            id,
        }))?;
    Ok(Json(task))
}

/// PUT /recurring/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RecurringTaskInput>,
) -> AppResult<Json<RecurringTask>> {
    let task = RecurringTaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RecurringTask",
            id,
        }))?;
    Ok(Json(task))
}

/// DELETE /recurring/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = RecurringTaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "RecurringTask",
            id,
        }))
    }
}
