//! Handlers for the single-row `/settings` resource.

use axum::extract::State;
use axum::Json;
use homelogger_core::settings::{self, SettingsOptions};
use homelogger_db::models::settings::{Settings, UpdateSettings};
use homelogger_db::repositories::SettingsRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /settings
///
/// Creates the default row on first access.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Settings>> {
    let current = SettingsRepo::ensure(&state.pool).await?;
    Ok(Json(current))
}

/// PUT /settings
///
/// Partial update: only the fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateSettings>,
) -> AppResult<Json<Settings>> {
    if let Some(system) = input.measurement_system.as_deref() {
        settings::validate_measurement_system(system)?;
    }
    if let Some(week_start) = input.week_start {
        settings::validate_week_start(week_start)?;
    }

    let current = SettingsRepo::ensure(&state.pool).await?;
    let updated = SettingsRepo::update(&state.pool, current.id, &input)
        .await?
        .ok_or_else(|| AppError::InternalError("Settings row disappeared during update".into()))?;
    tracing::info!(settings_id = updated.id, "Settings updated");
    Ok(Json(updated))
}

/// GET /settings/options
pub async fn options() -> Json<SettingsOptions> {
    Json(settings::options())
}
