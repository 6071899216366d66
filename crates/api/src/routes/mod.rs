pub mod appliance;
pub mod backup;
pub mod budget;
pub mod file;
pub mod health;
pub mod note;
pub mod planning;
pub mod service_record;
pub mod settings;
pub mod todo;

use axum::routing::get;
use axum::Router;
use homelogger_db::models::service_record::ServiceKind;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Paths match what existing clients call, so everything mounts at the
/// root rather than under a version prefix.
///
/// ```text
/// /appliances                     list, {id}, add, update/{id}, delete/{id}
/// /todo                           list, add, update/{id}, delete/{id}
/// /notes                          list, {id}, add, update/{id}, delete/{id}
/// /maintenance                    list, {id}, add, delete/{id}
/// /repair                         list, {id}, add, delete/{id}
///
/// /files/upload                   multipart upload
/// /files/info/{id}                metadata
/// /files/download/{id}            bytes
/// /files/{maintenance,repair,appliance}/{id}, /files/space/{spaceType}
/// /files/attach                   link a file
/// /files/{id}                     delete
///
/// /budget/categories              list, {id}, add, update/{id}, delete/{id}
/// /budget/scenarios               list, {id}, add, update/{id}, delete/{id}
/// /budget/summary                 totals, windows, monthly buckets
/// /planned-costs                  list, {id}, add, update/{id}, delete/{id}
/// /recurring                      list, {id}, add, update/{id}, delete/{id}
/// /upgrades                       list, {id}, add, update/{id}, delete/{id}
/// /dashboard/summary              headline figures
///
/// /settings                       get, update
/// /settings/options               option lists
/// ```
///
/// `/backup/download` lives in [`backup::router`] so it can sit outside the
/// request timeout.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Inventory.
        .nest("/appliances", appliance::router())
        .nest("/todo", todo::router())
        .nest("/notes", note::router())
        // Service history.
        .nest("/maintenance", service_record::router(ServiceKind::Maintenance))
        .nest("/repair", service_record::router(ServiceKind::Repair))
        // Attachments.
        .nest("/files", file::router())
        // Budgeting.
        .nest("/budget", budget::router())
        .nest("/planned-costs", budget::planned_cost_router())
        .nest("/recurring", planning::recurring_router())
        .nest("/upgrades", planning::upgrade_router())
        .route("/dashboard/summary", get(handlers::summary::dashboard))
        // Preferences.
        .nest("/settings", settings::router())
}
