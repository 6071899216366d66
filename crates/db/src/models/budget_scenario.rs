//! Budget scenario entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `budget_scenarios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetScenario {
    pub id: DbId,
    pub name: String,
    /// `YYYY-MM-DD` or empty.
    pub start_date: String,
    pub horizon_months: i32,
    pub inflation_rate: f64,
    pub is_active: bool,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a scenario or replacing all of its fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetScenarioInput {
    pub name: String,
    pub start_date: String,
    pub horizon_months: i32,
    pub inflation_rate: f64,
    pub is_active: bool,
    pub notes: String,
}
