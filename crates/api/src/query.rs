//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use std::fmt::Display;
use std::str::FromStr;

use axum::extract::FromRequestParts;
use homelogger_core::types::DbId;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// [`axum::extract::Query`] that rejects with the JSON error envelope
/// (`BAD_REQUEST`) instead of axum's plain-text body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Deserialize an optional number from a query string, treating an empty
/// value (`?applianceId=`) as absent. Anything else must parse.
fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Optional scope filters (`?applianceId=&spaceType=`) for todos and notes.
///
/// An `applianceId` of 0 and an empty `spaceType` mean "no filter".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub appliance_id: Option<DbId>,
    pub space_type: Option<String>,
}

impl ScopeParams {
    pub fn appliance_id(&self) -> Option<DbId> {
        self.appliance_id.filter(|id| *id != 0)
    }

    pub fn space_type(&self) -> Option<String> {
        self.space_type.clone().filter(|s| !s.is_empty())
    }
}

/// Query parameters for maintenance and repair listings.
///
/// Kept as raw strings: which ones are required depends on
/// `referenceType`, and the rules live in `homelogger_core::reference`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceParams {
    pub reference_type: Option<String>,
    pub appliance_id: Option<String>,
    pub space_type: Option<String>,
}

/// `?scenarioId=` filter for planned costs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub scenario_id: Option<DbId>,
}

impl ScenarioParams {
    pub fn scenario_id(&self) -> Option<DbId> {
        self.scenario_id.filter(|id| *id != 0)
    }
}

/// `?scenarioId=&horizonMonths=` for the budget and dashboard summaries.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub scenario_id: Option<DbId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub horizon_months: Option<i32>,
}
