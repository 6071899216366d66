//! Maintenance and repair records.
//!
//! Both live in tables of identical shape; [`ServiceKind`] selects which.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Which service-record table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Maintenance,
    Repair,
}

impl ServiceKind {
    pub fn table(self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance_records",
            Self::Repair => "repair_records",
        }
    }

    /// Entity name used in not-found errors and logs.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Repair => "Repair",
        }
    }

    /// Column in `saved_files` linking an attachment to this kind of record.
    pub fn file_column(self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance_id",
            Self::Repair => "repair_id",
        }
    }
}

/// A row from `maintenance_records` or `repair_records`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: DbId,
    pub description: String,
    pub date: String,
    pub cost: f64,
    pub notes: String,
    pub space_type: String,
    pub reference_type: String,
    pub appliance_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a maintenance or repair record.
///
/// `attachment_ids` lists previously uploaded files to link to the new
/// record; it is not stored on the record itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateServiceRecord {
    pub description: String,
    pub date: String,
    pub cost: f64,
    pub notes: String,
    pub space_type: String,
    pub reference_type: String,
    pub appliance_id: Option<DbId>,
    pub attachment_ids: Vec<DbId>,
}
