//! Handlers for the `/upgrades` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::upgrade_project::{UpgradeProject, UpgradeProjectInput};
use homelogger_db::repositories::UpgradeProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /upgrades
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UpgradeProject>>> {
    let projects = UpgradeProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /upgrades/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UpgradeProjectInput>,
) -> AppResult<(StatusCode, Json<UpgradeProject>)> {
    let project = UpgradeProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Upgrade project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /upgrades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UpgradeProject>> {
    let project = UpgradeProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UpgradeProject",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /upgrades/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpgradeProjectInput>,
) -> AppResult<Json<UpgradeProject>> {
    let project = UpgradeProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UpgradeProject",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /upgrades/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = UpgradeProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "UpgradeProject",
            id,
        }))
    }
}
