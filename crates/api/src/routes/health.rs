use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// `"ok"`, or `"error: <reason>"` when the database ping fails.
    pub db: String,
}

/// GET / -- plain-text greeting.
async fn root() -> &'static str {
    "Hello, World"
}

/// GET /health -- returns service and database health. 500 when the
/// database is unreachable.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, db) = match homelogger_db::health_check(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok".to_string()),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("error: {e}"))
        }
    };

    (
        code,
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            db,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
