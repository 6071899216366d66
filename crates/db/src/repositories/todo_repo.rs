//! Repository for the `todos` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::todo::{CreateTodo, Todo, TodoFilter};

const COLUMNS: &str =
    "id, label, checked, user_id, appliance_id, space_type, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo. A zero appliance id or empty space type is
    /// stored as NULL.
    pub async fn create(pool: &SqlitePool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (label, checked, user_id, appliance_id, space_type)
             VALUES (?1, ?2, ?3, NULLIF(?4, 0), NULLIF(?5, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.label)
            .bind(input.checked)
            .bind(&input.user_id)
            .bind(input.appliance_id)
            .bind(&input.space_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos, narrowed by whichever filters are set.
    pub async fn list(pool: &SqlitePool, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE (?1 IS NULL OR appliance_id = ?1)
               AND (?2 IS NULL OR space_type = ?2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(filter.appliance_id)
            .bind(&filter.space_type)
            .fetch_all(pool)
            .await
    }

    /// Set the checked flag. Returns `None` if the todo does not exist.
    pub async fn set_checked(
        pool: &SqlitePool,
        id: DbId,
        checked: bool,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET checked = ?2, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(checked)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
