//! Repository for the `planned_costs` table.
//!
//! Reads join the scenario and category names so clients can render a row
//! without further lookups.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::planned_cost::{PlannedCost, PlannedCostInput};

const SELECT: &str = "SELECT pc.id, pc.scenario_id, pc.category_id, pc.source_type, \
    pc.source_id, pc.cost_date, pc.amount, pc.notes, \
    s.name AS scenario_name, c.name AS category_name, \
    pc.created_at, pc.updated_at \
    FROM planned_costs pc \
    LEFT JOIN budget_scenarios s ON s.id = pc.scenario_id \
    LEFT JOIN budget_categories c ON c.id = pc.category_id";

/// Provides CRUD operations for planned costs.
pub struct PlannedCostRepo;

impl PlannedCostRepo {
    /// Insert a planned cost and return it with the joined names.
    pub async fn create(pool: &SqlitePool, input: &PlannedCostInput) -> Result<PlannedCost, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO planned_costs
                (scenario_id, category_id, source_type, source_id, cost_date, amount, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING id",
        )
        .bind(input.scenario_id)
        .bind(input.category_id)
        .bind(&input.source_type)
        .bind(input.source_id)
        .bind(&input.cost_date)
        .bind(input.amount)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<PlannedCost>, sqlx::Error> {
        let query = format!("{SELECT} WHERE pc.id = ?1");
        sqlx::query_as::<_, PlannedCost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List planned costs ordered by date, optionally for one scenario only.
    pub async fn list(
        pool: &SqlitePool,
        scenario_id: Option<DbId>,
    ) -> Result<Vec<PlannedCost>, sqlx::Error> {
        let query =
            format!("{SELECT} WHERE (?1 IS NULL OR pc.scenario_id = ?1) ORDER BY pc.cost_date, pc.id");
        sqlx::query_as::<_, PlannedCost>(&query)
            .bind(scenario_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a planned cost. Returns `None` if it does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &PlannedCostInput,
    ) -> Result<Option<PlannedCost>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE planned_costs SET
                scenario_id = ?2,
                category_id = ?3,
                source_type = ?4,
                source_id = ?5,
                cost_date = ?6,
                amount = ?7,
                notes = ?8,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1",
        )
        .bind(id)
        .bind(input.scenario_id)
        .bind(input.category_id)
        .bind(&input.source_type)
        .bind(input.source_id)
        .bind(&input.cost_date)
        .bind(input.amount)
        .bind(&input.notes)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planned_costs WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
