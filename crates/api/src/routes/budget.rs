//! Route definitions for budgeting: `/budget/*` and `/planned-costs`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{budget_category, budget_scenario, planned_cost, summary};
use crate::state::AppState;

/// Routes mounted at `/budget`.
///
/// ```text
/// GET    /summary                      -> summary::budget
///
/// GET    /categories                   -> list
/// GET    /categories/{id}              -> get_by_id
/// POST   /categories/add               -> create
/// PUT    /categories/update/{id}       -> update
/// DELETE /categories/delete/{id}       -> delete
///
/// GET    /scenarios                    -> list
/// GET    /scenarios/{id}               -> get_by_id
/// POST   /scenarios/add                -> create
/// PUT    /scenarios/update/{id}        -> update
/// DELETE /scenarios/delete/{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    let category_routes = Router::new()
        .route("/", get(budget_category::list))
        .route("/{id}", get(budget_category::get_by_id))
        .route("/add", post(budget_category::create))
        .route("/update/{id}", put(budget_category::update))
        .route("/delete/{id}", delete(budget_category::delete));

    let scenario_routes = Router::new()
        .route("/", get(budget_scenario::list))
        .route("/{id}", get(budget_scenario::get_by_id))
        .route("/add", post(budget_scenario::create))
        .route("/update/{id}", put(budget_scenario::update))
        .route("/delete/{id}", delete(budget_scenario::delete));

    Router::new()
        .route("/summary", get(summary::budget))
        .nest("/categories", category_routes)
        .nest("/scenarios", scenario_routes)
}

/// Routes mounted at `/planned-costs`.
///
/// ```text
/// GET    /                -> list (?scenarioId=)
/// GET    /{id}            -> get_by_id
/// POST   /add             -> create
/// PUT    /update/{id}     -> update
/// DELETE /delete/{id}     -> delete
/// ```
pub fn planned_cost_router() -> Router<AppState> {
    Router::new()
        .route("/", get(planned_cost::list))
        .route("/{id}", get(planned_cost::get_by_id))
        .route("/add", post(planned_cost::create))
        .route("/update/{id}", put(planned_cost::update))
        .route("/delete/{id}", delete(planned_cost::delete))
}
