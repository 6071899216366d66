//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Placeholders are
//! numbered (`?1`, `?2`, ...) so a value can be referenced twice.

pub mod appliance_repo;
pub mod budget_category_repo;
pub mod budget_scenario_repo;
pub mod note_repo;
pub mod planned_cost_repo;
pub mod recurring_task_repo;
pub mod saved_file_repo;
pub mod service_record_repo;
pub mod settings_repo;
pub mod todo_repo;
pub mod upgrade_project_repo;

pub use appliance_repo::ApplianceRepo;
pub use budget_category_repo::BudgetCategoryRepo;
pub use budget_scenario_repo::BudgetScenarioRepo;
pub use note_repo::NoteRepo;
pub use planned_cost_repo::PlannedCostRepo;
pub use recurring_task_repo::RecurringTaskRepo;
pub use saved_file_repo::SavedFileRepo;
pub use service_record_repo::ServiceRecordRepo;
pub use settings_repo::SettingsRepo;
pub use todo_repo::TodoRepo;
pub use upgrade_project_repo::UpgradeProjectRepo;
