//! Route definitions for the `/appliances` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::appliance;
use crate::state::AppState;

/// Routes mounted at `/appliances`.
///
/// ```text
/// GET    /                -> list
/// GET    /{id}            -> get_by_id
/// POST   /add             -> create
/// PUT    /update/{id}     -> update
/// DELETE /delete/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(appliance::list))
        .route("/{id}", get(appliance::get_by_id))
        .route("/add", post(appliance::create))
        .route("/update/{id}", put(appliance::update))
        .route("/delete/{id}", delete(appliance::delete))
}
