//! Route definitions for `/recurring` and `/upgrades`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{recurring_task, upgrade_project};
use crate::state::AppState;

/// Routes mounted at `/recurring`: list, `/{id}`, `/add`, `/update/{id}`,
/// `/delete/{id}`.
pub fn recurring_router() -> Router<AppState> {
    Router::new()
        .route("/", get(recurring_task::list))
        .route("/{id}", get(recurring_task::get_by_id))
        .route("/add", post(recurring_task::create))
        .route("/update/{id}", put(recurring_task::update))
        .route("/delete/{id}", delete(recurring_task::delete))
}

/// Routes mounted at `/upgrades`, same shape as `/recurring`.
pub fn upgrade_router() -> Router<AppState> {
    Router::new()
        .route("/", get(upgrade_project::list))
        .route("/{id}", get(upgrade_project::get_by_id))
        .route("/add", post(upgrade_project::create))
        .route("/update/{id}", put(upgrade_project::update))
        .route("/delete/{id}", delete(upgrade_project::delete))
}
