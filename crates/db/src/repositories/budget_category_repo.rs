//! Repository for the `budget_categories` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::budget_category::{BudgetCategory, BudgetCategoryInput};

const COLUMNS: &str = "id, name, asset_group, description, color, created_at, updated_at";

/// Provides CRUD operations for budget categories.
pub struct BudgetCategoryRepo;

impl BudgetCategoryRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &BudgetCategoryInput,
    ) -> Result<BudgetCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_categories (name, asset_group, description, color)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(&input.name)
            .bind(&input.asset_group)
            .bind(&input.description)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<BudgetCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budget_categories WHERE id = ?1");
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<BudgetCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budget_categories ORDER BY id");
        sqlx::query_as::<_, BudgetCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a category. Returns `None` if it does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &BudgetCategoryInput,
    ) -> Result<Option<BudgetCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE budget_categories SET
                name = ?2,
                asset_group = ?3,
                description = ?4,
                color = ?5,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.asset_group)
            .bind(&input.description)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Planned costs, tasks and upgrades that reference
    /// it keep the dangling id.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budget_categories WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
