//! Handlers for the `/budget/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use homelogger_core::error::CoreError;
use homelogger_core::types::DbId;
use homelogger_db::models::budget_category::{BudgetCategory, BudgetCategoryInput};
use homelogger_db::repositories::BudgetCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /budget/categories
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BudgetCategory>>> {
    let categories = BudgetCategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /budget/categories/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BudgetCategoryInput>,
) -> AppResult<(StatusCode, Json<BudgetCategory>)> {
    let category = BudgetCategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, "Budget category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /budget/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BudgetCategory>> {
    let category = BudgetCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetCategory",
            id,
        }))?;
    Ok(Json(category))
}

/// PUT /budget/categories/update/{id}
///
/// Full replacement. Planned costs keep pointing at the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BudgetCategoryInput>,
) -> AppResult<Json<BudgetCategory>> {
    let category = BudgetCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetCategory",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /budget/categories/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BudgetCategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BudgetCategory",
            id,
        }))
    }
}
