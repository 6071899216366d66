//! Note entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a note.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateNote {
    pub title: String,
    pub body: String,
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
}

/// DTO for editing a note. Scope (appliance, space) is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateNote {
    pub title: String,
    pub body: String,
}

/// Optional filters for listing notes.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
}
