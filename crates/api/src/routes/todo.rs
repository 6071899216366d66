//! Route definitions for the `/todo` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Routes mounted at `/todo`.
///
/// ```text
/// GET    /                -> list (?applianceId=&spaceType=)
/// POST   /add             -> create
/// PUT    /update/{id}     -> update (checked flag)
/// DELETE /delete/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list))
        .route("/add", post(todo::create))
        .route("/update/{id}", put(todo::update))
        .route("/delete/{id}", delete(todo::delete))
}
