//! Repository for the `saved_files` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::saved_file::{CreateSavedFile, SavedFile};
use crate::models::service_record::ServiceKind;

const COLUMNS: &str = "id, path, original_name, user_id, appliance_id, maintenance_id, \
    repair_id, space_type, created_at, updated_at";

/// Provides persistence for uploaded file metadata. File bytes are handled
/// by the API layer.
pub struct SavedFileRepo;

impl SavedFileRepo {
    /// Insert a file row with an empty path. The id it receives names the
    /// file on disk, so the path is filled in afterwards with
    /// [`SavedFileRepo::set_path`].
    pub async fn create(pool: &SqlitePool, input: &CreateSavedFile) -> Result<SavedFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO saved_files (original_name, user_id, space_type)
             VALUES (?1, ?2, NULLIF(?3, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedFile>(&query)
            .bind(&input.original_name)
            .bind(&input.user_id)
            .bind(&input.space_type)
            .fetch_one(pool)
            .await
    }

    pub async fn set_path(
        pool: &SqlitePool,
        id: DbId,
        path: &str,
    ) -> Result<Option<SavedFile>, sqlx::Error> {
        let query = format!(
            "UPDATE saved_files SET path = ?2, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedFile>(&query)
            .bind(id)
            .bind(path)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<SavedFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM saved_files WHERE id = ?1");
        sqlx::query_as::<_, SavedFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Files attached to a maintenance or repair record.
    pub async fn list_for_record(
        pool: &SqlitePool,
        kind: ServiceKind,
        record_id: DbId,
    ) -> Result<Vec<SavedFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM saved_files WHERE {} = ?1 ORDER BY id",
            kind.file_column()
        );
        sqlx::query_as::<_, SavedFile>(&query)
            .bind(record_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_appliance(
        pool: &SqlitePool,
        appliance_id: DbId,
    ) -> Result<Vec<SavedFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM saved_files WHERE appliance_id = ?1 ORDER BY id");
        sqlx::query_as::<_, SavedFile>(&query)
            .bind(appliance_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_space(
        pool: &SqlitePool,
        space_type: &str,
    ) -> Result<Vec<SavedFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM saved_files WHERE space_type = ?1 ORDER BY id");
        sqlx::query_as::<_, SavedFile>(&query)
            .bind(space_type)
            .fetch_all(pool)
            .await
    }

    /// Link a file to a maintenance or repair record. Returns `false` if the
    /// file does not exist.
    pub async fn attach_to_record(
        pool: &SqlitePool,
        kind: ServiceKind,
        file_id: DbId,
        record_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE saved_files SET {} = ?2, updated_at = CURRENT_TIMESTAMP WHERE id = ?1",
            kind.file_column()
        );
        let result = sqlx::query(&query)
            .bind(file_id)
            .bind(record_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn attach_to_appliance(
        pool: &SqlitePool,
        file_id: DbId,
        appliance_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE saved_files SET appliance_id = ?2, updated_at = CURRENT_TIMESTAMP WHERE id = ?1",
        )
        .bind(file_id)
        .bind(appliance_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn attach_to_space(
        pool: &SqlitePool,
        file_id: DbId,
        space_type: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE saved_files SET space_type = ?2, updated_at = CURRENT_TIMESTAMP WHERE id = ?1",
        )
        .bind(file_id)
        .bind(space_type)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_files WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
