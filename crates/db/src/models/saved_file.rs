//! Saved file (upload) model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `saved_files` table.
///
/// `path` is where the bytes live on disk; it is empty until the upload
/// has been written.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFile {
    pub id: DbId,
    pub path: String,
    pub original_name: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub appliance_id: Option<DbId>,
    pub maintenance_id: Option<DbId>,
    pub repair_id: Option<DbId>,
    pub space_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO built from an upload form.
#[derive(Debug, Clone, Default)]
pub struct CreateSavedFile {
    pub original_name: String,
    pub user_id: String,
    pub space_type: Option<String>,
}

/// Body of `POST /files/attach`. Zero ids and empty strings are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachFile {
    pub file_id: DbId,
    pub maintenance_id: Option<DbId>,
    pub repair_id: Option<DbId>,
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
}
