use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /            -> get (creates defaults on first access)
/// PUT    /            -> update (partial)
/// GET    /options     -> options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::get).put(settings::update))
        .route("/options", get(settings::options))
}
