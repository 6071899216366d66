//! Handlers for the `/todo` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::todo::{CreateTodo, Todo, TodoFilter, UpdateTodo};
use homelogger_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ApiQuery, ScopeParams};
use crate::state::AppState;

/// GET /todo?applianceId=&spaceType=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ScopeParams>,
) -> AppResult<Json<Vec<Todo>>> {
    let filter = TodoFilter {
        appliance_id: params.appliance_id(),
        space_type: params.space_type(),
    };
    let todos = TodoRepo::list(&state.pool, &filter).await?;
    Ok(Json(todos))
}

/// POST /todo/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = TodoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todo/update/{id}
///
/// Only the checked flag can change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::set_checked(&state.pool, id, input.checked)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// DELETE /todo/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }))
    }
}
