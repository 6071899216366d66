//! Handlers for the `/budget/scenarios` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::budget_scenario::{BudgetScenario, BudgetScenarioInput};
use homelogger_db::repositories::BudgetScenarioRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /budget/scenarios
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BudgetScenario>>> {
    let scenarios = BudgetScenarioRepo::list(&state.pool).await?;
    Ok(Json(scenarios))
}

/// POST /budget/scenarios/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BudgetScenarioInput>,
) -> AppResult<(StatusCode, Json<BudgetScenario>)> {
    let scenario = BudgetScenarioRepo::create(&state.pool, &input).await?;
    tracing::info!(scenario_id = scenario.id, "Budget scenario created");
    Ok((StatusCode::CREATED, Json(scenario)))
}

/// GET /budget/scenarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetScenario>> {
    let scenario = BudgetScenarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetScenario",
            id,
        }))?;
    Ok(Json(scenario))
}

/// PUT /budget/scenarios/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BudgetScenarioInput>,
) -> AppResult<Json<BudgetScenario>> {
    let scenario = BudgetScenarioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetScenario",
            id,
        }))?;
    Ok(Json(scenario))
}

/// DELETE /budget/scenarios/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BudgetScenarioRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BudgetScenario",
            id,
        }))
    }
}
