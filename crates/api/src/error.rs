//! HTTP error type shared by every handler.
//!
//! Every failure leaves the server as `{"error": "<message>", "code": "<CODE>"}`.
//! Server-side failures are logged in full and reported with a generic
//! message so paths and SQL never reach the client.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use homelogger_core::error::CoreError;
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Reading or writing stored files or backup archives.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ErrorBody {
    fn internal() -> (StatusCode, Self) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Self {
                error: INTERNAL_MESSAGE.to_string(),
                code: "INTERNAL_ERROR",
            },
        )
    }

    fn new(status: StatusCode, code: &'static str, error: impl Into<String>) -> (StatusCode, Self) {
        (
            status,
            Self {
                error: error.into(),
                code,
            },
        )
    }
}

impl AppError {
    fn to_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => ErrorBody::new(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                ErrorBody::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.as_str())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                ErrorBody::new(StatusCode::CONFLICT, "CONFLICT", msg.as_str())
            }
            AppError::BadRequest(msg) => {
                ErrorBody::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.as_str())
            }
            AppError::Database(err) => database_body(err),
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                ErrorBody::internal()
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, kind = ?err.kind(), "Storage failure");
                ErrorBody::internal()
            }
        }
    }
}

/// `RowNotFound` is a 404 and a SQLite unique violation a 409. Anything else
/// is logged and hidden behind a 500.
fn database_body(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    match err {
        sqlx::Error::RowNotFound => {
            ErrorBody::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ErrorBody::new(
            StatusCode::CONFLICT,
            "CONFLICT",
            "Duplicate value violates a unique constraint",
        ),
        other => {
            tracing::error!(error = %other, "Database failure");
            ErrorBody::internal()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_body();
        (status, Json(body)).into_response()
    }
}
