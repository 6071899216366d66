//! Application settings rules.
//!
//! The settings table holds a single row. This module owns its defaults,
//! the option lists offered to clients, and validation of updates.

use serde::Serialize;

use crate::error::CoreError;

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_TIME_ZONE: &str = "UTC";
pub const DEFAULT_MEASUREMENT_SYSTEM: &str = "metric";
pub const DEFAULT_WEEK_START: i32 = 0;
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
pub const DEFAULT_NUMBERING_SYSTEM: &str = "latn";

pub const LOCALES: &[&str] = &["en-US", "en-ZA", "en-UK"];
pub const LANGUAGES: &[&str] = &["en"];
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD", "JPY", "ZAR"];
pub const TIME_ZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Berlin",
    "Asia/Tokyo",
    "Australia/Sydney",
];
pub const MEASUREMENT_SYSTEMS: &[&str] = &["imperial", "metric"];
pub const WEEK_START_OPTIONS: &[i32] = &[0, 1, 6];
pub const DATE_FORMATS: &[&str] = &[
    "YYYY-MM-DD",
    "DD/MM/YYYY",
    "MM/DD/YYYY",
    "YYYY/MM/DD",
    "DD-MM-YYYY",
    "MM-DD-YYYY",
];
pub const NUMBERING_SYSTEMS: &[&str] = &["latn"];

/// Static option lists returned by `GET /settings/options`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOptions {
    pub locales: &'static [&'static str],
    pub languages: &'static [&'static str],
    pub currencies: &'static [&'static str],
    pub time_zones: &'static [&'static str],
    pub measurement_systems: &'static [&'static str],
    pub week_start_options: &'static [i32],
    pub date_formats: &'static [&'static str],
    pub numbering_systems: &'static [&'static str],
}

pub fn options() -> SettingsOptions {
    SettingsOptions {
        locales: LOCALES,
        languages: LANGUAGES,
        currencies: CURRENCIES,
        time_zones: TIME_ZONES,
        measurement_systems: MEASUREMENT_SYSTEMS,
        week_start_options: WEEK_START_OPTIONS,
        date_formats: DATE_FORMATS,
        numbering_systems: NUMBERING_SYSTEMS,
    }
}

/// Validate a measurement system. Only `imperial` and `metric` are accepted.
pub fn validate_measurement_system(value: &str) -> Result<(), CoreError> {
    if !MEASUREMENT_SYSTEMS.contains(&value) {
        return Err(CoreError::Validation(
            "measurementSystem must be 'imperial' or 'metric'".to_string(),
        ));
    }
    Ok(())
}

/// Validate a week start day (0 = Sunday through 6 = Saturday).
///
/// Any day is storable even though the option list only offers three.
pub fn validate_week_start(value: i32) -> Result<(), CoreError> {
    if !(0..=6).contains(&value) {
        return Err(CoreError::Validation(
            "weekStart must be between 0 and 6".to_string(),
        ));
    }
    Ok(())
}
