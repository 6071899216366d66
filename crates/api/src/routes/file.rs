//! Route definitions for the `/files` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::file;
use crate::state::AppState;

/// Routes mounted at `/files`.
///
/// ```text
/// POST   /upload                  -> upload (multipart)
/// GET    /info/{id}               -> info
/// GET    /download/{id}           -> download
/// GET    /maintenance/{id}        -> list_for_maintenance
/// GET    /repair/{id}             -> list_for_repair
/// GET    /appliance/{id}          -> list_for_appliance
/// GET    /space/{space_type}      -> list_for_space
/// POST   /attach                  -> attach
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(file::upload))
        .route("/info/{id}", get(file::info))
        .route("/download/{id}", get(file::download))
        .route("/maintenance/{id}", get(file::list_for_maintenance))
        .route("/repair/{id}", get(file::list_for_repair))
        .route("/appliance/{id}", get(file::list_for_appliance))
        .route("/space/{space_type}", get(file::list_for_space))
        .route("/attach", post(file::attach))
        .route("/{id}", delete(file::delete))
}
