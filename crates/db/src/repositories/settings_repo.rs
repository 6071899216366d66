//! Repository for the single-row `settings` table.

use homelogger_core::settings::{
    DEFAULT_CURRENCY, DEFAULT_DATE_FORMAT, DEFAULT_LANGUAGE, DEFAULT_LOCALE,
    DEFAULT_MEASUREMENT_SYSTEM, DEFAULT_NUMBERING_SYSTEM, DEFAULT_TIME_ZONE, DEFAULT_WEEK_START,
};
use homelogger_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::settings::{Settings, UpdateSettings};

const COLUMNS: &str = "id, locale, language, currency, time_zone, measurement_system, \
    week_start, date_format, numbering_system, created_at, updated_at";

pub struct SettingsRepo;

impl SettingsRepo {
    /// The settings row, if one exists. The lowest id wins should there
    /// ever be more than one.
    pub async fn find(pool: &SqlitePool) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Settings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Return the settings row, inserting the defaults first if the table
    /// is empty.
    pub async fn ensure(pool: &SqlitePool) -> Result<Settings, sqlx::Error> {
        if let Some(settings) = Self::find(pool).await? {
            return Ok(settings);
        }

        let query = format!(
            "INSERT INTO settings
                (locale, language, currency, time_zone, measurement_system,
                 week_start, date_format, numbering_system)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             RETURNING {COLUMNS}"
        );
        let settings = sqlx::query_as::<_, Settings>(&query)
            .bind(DEFAULT_LOCALE)
            .bind(DEFAULT_LANGUAGE)
            .bind(DEFAULT_CURRENCY)
            .bind(DEFAULT_TIME_ZONE)
            .bind(DEFAULT_MEASUREMENT_SYSTEM)
            .bind(DEFAULT_WEEK_START)
            .bind(DEFAULT_DATE_FORMAT)
            .bind(DEFAULT_NUMBERING_SYSTEM)
            .fetch_one(pool)
            .await?;
        tracing::info!(settings_id = settings.id, "Created default settings");
        Ok(settings)
    }

    /// Apply the provided fields to the settings row. Validation is the
    /// caller's job.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSettings,
    ) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET
                locale = COALESCE(?2, locale),
                language = COALESCE(?3, language),
                currency = COALESCE(?4, currency),
                time_zone = COALESCE(?5, time_zone),
                measurement_system = COALESCE(?6, measurement_system),
                week_start = COALESCE(?7, week_start),
                date_format = COALESCE(?8, date_format),
                numbering_system = COALESCE(?9, numbering_system),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(id)
            .bind(&input.locale)
            .bind(&input.language)
            .bind(&input.currency)
            .bind(&input.time_zone)
            .bind(&input.measurement_system)
            .bind(input.week_start)
            .bind(&input.date_format)
            .bind(&input.numbering_system)
            .fetch_optional(pool)
            .await
    }
}
