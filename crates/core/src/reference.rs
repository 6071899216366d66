//! Scoping rules for maintenance and repair records.
//!
//! A record is tied either to a space (kitchen, garage, ...) or to an
//! appliance. List queries must name which one they want.

use crate::error::CoreError;
use crate::types::DbId;

/// Reference type marking a record as belonging to a space.
pub const SPACE_REFERENCE: &str = "Space";

/// Resolved filter for a maintenance or repair listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceScope {
    /// Records with reference type `Space` and the given space type.
    Space(String),
    /// Records attached to the given appliance.
    Appliance(DbId),
}

/// Resolve raw query parameters into a [`ReferenceScope`].
///
/// Empty strings count as missing. For the appliance scope the id must
/// parse as an integer.
pub fn resolve_scope(
    reference_type: Option<&str>,
    appliance_id: Option<&str>,
    space_type: Option<&str>,
) -> Result<ReferenceScope, CoreError> {
    let reference_type = non_empty(reference_type).ok_or_else(|| {
        CoreError::Validation("Missing required query parameter: referenceType".to_string())
    })?;

    if reference_type == SPACE_REFERENCE {
        let space = non_empty(space_type).ok_or_else(|| {
            CoreError::Validation(
                "Missing required query parameter: spaceType for Space reference".to_string(),
            )
        })?;
        return Ok(ReferenceScope::Space(space.to_string()));
    }

    let raw_id = non_empty(appliance_id).ok_or_else(|| {
        CoreError::Validation(
            "Missing required query parameter: applianceId for Appliance reference".to_string(),
        )
    })?;
    let id = raw_id
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation("Invalid applianceId format".to_string()))?;
    Ok(ReferenceScope::Appliance(id))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
