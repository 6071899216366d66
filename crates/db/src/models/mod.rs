//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO for inserts (and full replacements)
//! - A narrower update DTO where a resource supports partial edits
//!
//! JSON field names are camelCase on the wire.

pub mod appliance;
pub mod budget_category;
pub mod budget_scenario;
pub mod note;
pub mod planned_cost;
pub mod recurring_task;
pub mod saved_file;
pub mod service_record;
pub mod settings;
pub mod todo;
pub mod upgrade_project;
