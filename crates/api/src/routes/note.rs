//! Route definitions for the `/notes` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// GET    /                -> list (?applianceId=&spaceType=)
/// GET    /{id}            -> get_by_id
/// POST   /add             -> create
/// PUT    /update/{id}     -> update
/// DELETE /delete/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(note::list))
        .route("/{id}", get(note::get_by_id))
        .route("/add", post(note::create))
        .route("/update/{id}", put(note::update))
        .route("/delete/{id}", delete(note::delete))
}
