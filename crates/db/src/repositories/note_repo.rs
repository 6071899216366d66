//! Repository for the `notes` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::note::{CreateNote, Note, NoteFilter, UpdateNote};

const COLUMNS: &str = "id, title, body, appliance_id, space_type, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, body, appliance_id, space_type)
             VALUES (?1, ?2, NULLIF(?3, 0), NULLIF(?4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.appliance_id)
            .bind(&input.space_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = ?1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes, newest first, narrowed by whichever filters are set.
    pub async fn list(pool: &SqlitePool, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE (?1 IS NULL OR appliance_id = ?1)
               AND (?2 IS NULL OR space_type = ?2)
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(filter.appliance_id)
            .bind(&filter.space_type)
            .fetch_all(pool)
            .await
    }

    /// Replace title and body. Returns `None` if the note does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET title = ?2, body = ?3, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
