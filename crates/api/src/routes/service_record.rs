//! Route definitions for `/maintenance` and `/repair`.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use homelogger_core::types::DbId;
use homelogger_db::models::service_record::{CreateServiceRecord, ServiceKind};

use crate::handlers::service_record;
use crate::query::{ApiQuery, ReferenceParams};
use crate::state::AppState;

/// Routes mounted at `/maintenance` or `/repair`, bound to `kind`.
///
/// ```text
/// GET    /                -> list (?referenceType=&applianceId=&spaceType=)
/// GET    /{id}            -> get_by_id
/// POST   /add             -> create
/// DELETE /delete/{id}     -> delete (removes attached files)
/// ```
pub fn router(kind: ServiceKind) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(move |state: State<AppState>, query: ApiQuery<ReferenceParams>| {
                service_record::list(kind, state, query)
            }),
        )
        .route(
            "/{id}",
            get(move |state: State<AppState>, id: Path<DbId>| {
                service_record::get_by_id(kind, state, id)
            }),
        )
        .route(
            "/add",
            post(move |state: State<AppState>, body: Json<CreateServiceRecord>| {
                service_record::create(kind, state, body)
            }),
        )
        .route(
            "/delete/{id}",
            delete(move |state: State<AppState>, id: Path<DbId>| {
                service_record::delete(kind, state, id)
            }),
        )
}
