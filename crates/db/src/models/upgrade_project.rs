//! Upgrade project entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `upgrade_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeProject {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub target_date: String,
    pub estimated_cost: f64,
    pub notes: String,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an upgrade project or replacing all of its fields.
///
/// On insert, an empty status becomes `planned`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpgradeProjectInput {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub target_date: String,
    pub estimated_cost: f64,
    pub notes: String,
    pub category_id: Option<DbId>,
}
