//! Recurring task entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `recurring_tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTask {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub interval_value: i32,
    pub interval_unit: String,
    pub next_due_date: String,
    pub estimated_cost: f64,
    pub reference_type: String,
    pub space_type: String,
    pub appliance_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub auto_create_todo: bool,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a recurring task or replacing all of its fields.
///
/// On insert, an interval value of 0 becomes 1 and an empty unit becomes
/// `month`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringTaskInput {
    pub name: String,
    pub description: String,
    pub interval_value: i32,
    pub interval_unit: String,
    pub next_due_date: String,
    pub estimated_cost: f64,
    pub reference_type: String,
    pub space_type: String,
    pub appliance_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub auto_create_todo: bool,
    pub notes: String,
}
