//! Repository for the `appliances` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::appliance::{Appliance, ApplianceInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, appliance_name, manufacturer, model_number, serial_number, \
    year_purchased, purchase_price, location, type, created_at, updated_at";

/// Provides CRUD operations for appliances.
pub struct ApplianceRepo;

impl ApplianceRepo {
    /// Insert a new appliance, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ApplianceInput) -> Result<Appliance, sqlx::Error> {
        let query = format!(
            "INSERT INTO appliances
                (appliance_name, manufacturer, model_number, serial_number,
                 year_purchased, purchase_price, location, type)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appliance>(&query)
            .bind(&input.appliance_name)
            .bind(&input.manufacturer)
            .bind(&input.model_number)
            .bind(&input.serial_number)
            .bind(&input.year_purchased)
            .bind(&input.purchase_price)
            .bind(&input.location)
            .bind(&input.appliance_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Appliance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appliances WHERE id = ?1");
        sqlx::query_as::<_, Appliance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all appliances in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Appliance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appliances ORDER BY id");
        sqlx::query_as::<_, Appliance>(&query).fetch_all(pool).await
    }

    /// Replace every field of an appliance.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ApplianceInput,
    ) -> Result<Option<Appliance>, sqlx::Error> {
        let query = format!(
            "UPDATE appliances SET
                appliance_name = ?2,
                manufacturer = ?3,
                model_number = ?4,
                serial_number = ?5,
                year_purchased = ?6,
                purchase_price = ?7,
                location = ?8,
                type = ?9,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appliance>(&query)
            .bind(id)
            .bind(&input.appliance_name)
            .bind(&input.manufacturer)
            .bind(&input.model_number)
            .bind(&input.serial_number)
            .bind(&input.year_purchased)
            .bind(&input.purchase_price)
            .bind(&input.location)
            .bind(&input.appliance_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete an appliance. Rows referencing it are left untouched.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appliances WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
