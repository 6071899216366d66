//! Planned cost entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planned cost joined with its scenario and category names.
///
/// The names are `None` when the reference is unset or points at a row
/// that no longer exists.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedCost {
    pub id: DbId,
    pub scenario_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub source_type: String,
    pub source_id: Option<DbId>,
    pub cost_date: String,
    pub amount: f64,
    pub notes: String,
    pub scenario_name: Option<String>,
    pub category_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a planned cost or replacing all of its fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannedCostInput {
    pub scenario_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub source_type: String,
    pub source_id: Option<DbId>,
    pub cost_date: String,
    pub amount: f64,
    pub notes: String,
}
