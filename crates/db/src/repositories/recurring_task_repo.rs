//! Repository for the `recurring_tasks` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::recurring_task::{RecurringTask, RecurringTaskInput};

const COLUMNS: &str = "id, name, description, interval_value, interval_unit, next_due_date, \
    estimated_cost, reference_type, space_type, appliance_id, category_id, auto_create_todo, \
    notes, created_at, updated_at";

/// Provides CRUD operations for recurring tasks.
pub struct RecurringTaskRepo;

impl RecurringTaskRepo {
    /// Insert a new task. A zero interval value becomes 1 and an empty
    /// interval unit becomes `month`.
    pub async fn create(
        pool: &SqlitePool,
        input: &RecurringTaskInput,
    ) -> Result<RecurringTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO recurring_tasks
                (name, description, interval_value, interval_unit, next_due_date,
                 estimated_cost, reference_type, space_type, appliance_id, category_id,
                 auto_create_todo, notes)
             VALUES (?1, ?2, COALESCE(NULLIF(?3, 0), 1), COALESCE(NULLIF(?4, ''), 'month'),
                     ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecurringTask>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.interval_value)
            .bind(&input.interval_unit)
            .bind(&input.next_due_date)
            .bind(input.estimated_cost)
            .bind(&input.reference_type)
            .bind(&input.space_type)
            .bind(input.appliance_id)
            .bind(input.category_id)
            .bind(input.auto_create_todo)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<RecurringTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recurring_tasks WHERE id = ?1");
        sqlx::query_as::<_, RecurringTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<RecurringTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recurring_tasks ORDER BY id");
        sqlx::query_as::<_, RecurringTask>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a task. Returns `None` if it does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &RecurringTaskInput,
    ) -> Result<Option<RecurringTask>, sqlx::Error> {
        let query = format!(
            "UPDATE recurring_tasks SET
                name = ?2,
                description = ?3,
                interval_value = ?4,
                interval_unit = ?5,
                next_due_date = ?6,
                estimated_cost = ?7,
                reference_type = ?8,
                space_type = ?9,
                appliance_id = ?10,
                category_id = ?11,
                auto_create_todo = ?12,
                notes = ?13,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecurringTask>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.interval_value)
            .bind(&input.interval_unit)
            .bind(&input.next_due_date)
            .bind(input.estimated_cost)
            .bind(&input.reference_type)
            .bind(&input.space_type)
            .bind(input.appliance_id)
            .bind(input.category_id)
            .bind(input.auto_create_todo)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recurring_tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
