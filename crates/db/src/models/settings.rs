//! Settings model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: DbId,
    pub locale: String,
    pub language: String,
    pub currency: String,
    pub time_zone: String,
    pub measurement_system: String,
    pub week_start: i32,
    pub date_format: String,
    pub numbering_system: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `PUT /settings`. Only provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    pub locale: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub time_zone: Option<String>,
    pub measurement_system: Option<String>,
    pub week_start: Option<i32>,
    pub date_format: Option<String>,
    pub numbering_system: Option<String>,
}
