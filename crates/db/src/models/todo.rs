//! Todo entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A todo row from the `todos` table.
///
/// The user id is serialized as `userid`, the key existing clients use.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: DbId,
    pub label: String,
    pub checked: bool,
    #[serde(rename = "userid")]
    pub user_id: String,
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a todo.
///
/// An `applianceId` of 0 and an empty `spaceType` both mean "not scoped".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTodo {
    pub label: String,
    pub checked: bool,
    #[serde(rename = "userid", alias = "userId")]
    pub user_id: String,
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
}

/// DTO for toggling a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub checked: bool,
}

/// Optional filters for listing todos. Both apply when both are given.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
}
