//! Handlers for the `/appliances` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::appliance::{Appliance, ApplianceInput};
use homelogger_db::repositories::ApplianceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /appliances/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ApplianceInput>,
) -> AppResult<(StatusCode, Json<Appliance>)> {
    let appliance = ApplianceRepo::create(&state.pool, &input).await?;
    tracing::info!(appliance_id = appliance.id, "Appliance created");
    Ok((StatusCode::CREATED, Json(appliance)))
}

/// GET /appliances
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Appliance>>> {
    let appliances = ApplianceRepo::list(&state.pool).await?;
    Ok(Json(appliances))
}

/// GET /appliances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Appliance>> {
    let appliance = ApplianceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appliance",
            id,
        }))?;
    Ok(Json(appliance))
}

/// PUT /appliances/update/{id}
///
/// Replaces every field; omitted fields become empty.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApplianceInput>,
) -> AppResult<Json<Appliance>> {
    let appliance = ApplianceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appliance",
            id,
        }))?;
    Ok(Json(appliance))
}

/// DELETE /appliances/delete/{id}
///
/// Todos, notes, records and files referencing the appliance are left in
/// place.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ApplianceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Appliance",
            id,
        }))
    }
}
