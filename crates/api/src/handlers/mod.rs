pub mod appliance;
pub mod backup;
pub mod budget_category;
pub mod budget_scenario;
pub mod file;
pub mod note;
pub mod planned_cost;
pub mod recurring_task;
pub mod service_record;
pub mod settings;
pub mod summary;
pub mod todo;
pub mod upgrade_project;
