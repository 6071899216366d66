//! Repository for the `upgrade_projects` table.

use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::upgrade_project::{UpgradeProject, UpgradeProjectInput};

const COLUMNS: &str = "id, title, description, status, priority, target_date, estimated_cost, \
    notes, category_id, created_at, updated_at";

/// Provides CRUD operations for upgrade projects.
pub struct UpgradeProjectRepo;

impl UpgradeProjectRepo {
    /// Insert a new project. An empty status becomes `planned`.
    pub async fn create(
        pool: &SqlitePool,
        input: &UpgradeProjectInput,
    ) -> Result<UpgradeProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO upgrade_projects
                (title, description, status, priority, target_date, estimated_cost, notes, category_id)
             VALUES (?1, ?2, COALESCE(NULLIF(?3, ''), 'planned'), ?4, ?5, ?6, ?7, ?8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UpgradeProject>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.target_date)
            .bind(input.estimated_cost)
            .bind(&input.notes)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<UpgradeProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM upgrade_projects WHERE id = ?1");
        sqlx::query_as::<_, UpgradeProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<UpgradeProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM upgrade_projects ORDER BY id");
        sqlx::query_as::<_, UpgradeProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of a project. Returns `None` if it does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpgradeProjectInput,
    ) -> Result<Option<UpgradeProject>, sqlx::Error> {
        let query = format!(
            "UPDATE upgrade_projects SET
                title = ?2,
                description = ?3,
                status = ?4,
                priority = ?5,
                target_date = ?6,
                estimated_cost = ?7,
                notes = ?8,
                category_id = ?9,
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UpgradeProject>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.target_date)
            .bind(input.estimated_cost)
            .bind(&input.notes)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM upgrade_projects WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
