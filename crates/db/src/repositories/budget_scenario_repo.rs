//! Repository for the `budget_scenarios` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::budget_scenario::{BudgetScenario, BudgetScenarioInput};

const COLUMNS: &str = "id, name, start_date, horizon_months, inflation_rate, is_active, notes, \
    created_at, updated_at";

/// Provides CRUD operations for budget scenarios.
pub struct BudgetScenarioRepo;

impl BudgetScenarioRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &BudgetScenarioInput,
    ) -> Result<BudgetScenario, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_scenarios
                (name, start_date, horizon_months, inflation_rate, is_active, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetScenario>(&query)
            .bind(&input.name)
            .bind(&input.start_date)
            .bind(input.horizon_months)
            .bind(input.inflation_rate)
            .bind(input.is_active)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<BudgetScenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budget_scenarios WHERE id = ?1");
        sqlx::query_as::<_, BudgetScenario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<BudgetScenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budget_scenarios ORDER BY id");
        sqlx::query_as::<_, BudgetScenario>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a scenario. Returns `None` if it does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &BudgetScenarioInput,
    ) -> Result<Option<BudgetScenario>, sqlx::Error> {
        let query = format!(
            "UPDATE budget_scenarios SET
                name = ?2,
                start_date = ?3,
                horizon_months = ?4,
                inflation_rate = ?5,
                is_active = ?6,
                notes = ?7,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetScenario>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.start_date)
            .bind(input.horizon_months)
            .bind(input.inflation_rate)
            .bind(input.is_active)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budget_scenarios WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
