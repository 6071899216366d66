use axum::routing::get;
use axum::Router;

use crate::handlers::backup;
use crate::state::AppState;

/// `GET /backup/download`.
///
/// Merged outside the request timeout (see `router::build_app_router`).
pub fn router() -> Router<AppState> {
    Router::new().route("/backup/download", get(backup::download))
}
