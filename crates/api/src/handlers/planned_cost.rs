//! Handlers for the `/planned-costs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::planned_cost::{PlannedCost, PlannedCostInput};
use homelogger_db::repositories::PlannedCostRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ApiQuery, ScenarioParams};
use crate::state::AppState;

/// GET /planned-costs?scenarioId=
///
/// Rows carry the joined scenario and category names.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ScenarioParams>,
) -> AppResult<Json<Vec<PlannedCost>>> {
    let costs = PlannedCostRepo::list(&state.pool, params.scenario_id()).await?;
    Ok(Json(costs))
}

/// POST /planned-costs/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PlannedCostInput>,
) -> AppResult<(StatusCode, Json<PlannedCost>)> {
    let cost = PlannedCostRepo::create(&state.pool, &input).await?;
    tracing::info!(planned_cost_id = cost.id, "Planned cost created");
    Ok((StatusCode::CREATED, Json(cost)))
}

/// GET /planned-costs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlannedCost>> {
    let cost = PlannedCostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PlannedCost",
            id,
        }))?;
    Ok(Json(cost))
}

/// PUT /planned-costs/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PlannedCostInput>,
) -> AppResult<Json<PlannedCost>> {
    let cost = PlannedCostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PlannedCost",
            id,
        }))?;
    Ok(Json(cost))
}

/// DELETE /planned-costs/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PlannedCostRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PlannedCost",
            id,
        }))
    }
}
