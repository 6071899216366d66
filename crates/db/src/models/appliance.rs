//! Appliance entity model and DTOs.

use homelogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An appliance row from the `appliances` table.
///
/// Purchase year and price are free-form text as entered by the user.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    pub id: DbId,
    pub appliance_name: String,
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub year_purchased: String,
    pub purchase_price: String,
    pub location: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub appliance_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an appliance or replacing all of its fields.
///
/// Missing fields are stored as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplianceInput {
    pub appliance_name: String,
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub year_purchased: String,
    pub purchase_price: String,
    pub location: String,
    #[serde(rename = "type")]
    pub appliance_type: String,
}
