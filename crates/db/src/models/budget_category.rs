//! Budget category entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `budget_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub id: DbId,
    pub name: String,
    pub asset_group: String,
    pub description: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category or replacing all of its fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetCategoryInput {
    pub name: String,
    pub asset_group: String,
    pub description: String,
    pub color: String,
}
