//! Repository for `maintenance_records` and `repair_records`.
//!
//! Both tables share one shape, so every method takes a [`ServiceKind`]
//! naming the table to use.

use homelogger_core::reference::{ReferenceScope, SPACE_REFERENCE};
use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::service_record::{CreateServiceRecord, ServiceKind, ServiceRecord};

const COLUMNS: &str = "id, description, date, cost, notes, space_type, reference_type, \
    appliance_id, created_at, updated_at";

/// Provides CRUD operations for maintenance and repair records.
pub struct ServiceRecordRepo;

impl ServiceRecordRepo {
    /// Insert a new record. A zero appliance id is stored as NULL.
    pub async fn create(
        pool: &SqlitePool,
        kind: ServiceKind,
        input: &CreateServiceRecord,
    ) -> Result<ServiceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table}
                (description, date, cost, notes, space_type, reference_type, appliance_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULLIF(?7, 0))
             RETURNING {COLUMNS}",
            table = kind.table()
        );
        sqlx::query_as::<_, ServiceRecord>(&query)
            .bind(&input.description)
            .bind(&input.date)
            .bind(input.cost)
            .bind(&input.notes)
            .bind(&input.space_type)
            .bind(&input.reference_type)
            .bind(input.appliance_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        kind: ServiceKind,
        id: DbId,
    ) -> Result<Option<ServiceRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = ?1", kind.table());
        sqlx::query_as::<_, ServiceRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List records for a space or an appliance, oldest first.
    pub async fn list_by_scope(
        pool: &SqlitePool,
        kind: ServiceKind,
        scope: &ReferenceScope,
    ) -> Result<Vec<ServiceRecord>, sqlx::Error> {
        match scope {
            ReferenceScope::Space(space) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM {} WHERE reference_type = ?1 AND space_type = ?2 ORDER BY id",
                    kind.table()
                );
                sqlx::query_as::<_, ServiceRecord>(&query)
                    .bind(SPACE_REFERENCE)
                    .bind(space)
                    .fetch_all(pool)
                    .await
            }
            ReferenceScope::Appliance(appliance_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM {} WHERE appliance_id = ?1 ORDER BY id",
                    kind.table()
                );
                sqlx::query_as::<_, ServiceRecord>(&query)
                    .bind(appliance_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Costs of every record of this kind, for dashboard totals.
    pub async fn list_costs(pool: &SqlitePool, kind: ServiceKind) -> Result<Vec<f64>, sqlx::Error> {
        let query = format!("SELECT cost FROM {} ORDER BY id", kind.table());
        sqlx::query_scalar::<_, f64>(&query).fetch_all(pool).await
    }

    /// Delete a record. Attached files are the caller's responsibility.
    pub async fn delete(pool: &SqlitePool, kind: ServiceKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = ?1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
