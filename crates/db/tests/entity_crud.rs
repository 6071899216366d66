//! Integration tests for repository CRUD operations.
//!
//! Exercises the repository layer against a real SQLite database:
//! - Create, read, update, delete per resource
//! - Filters on todos, notes and service records
//! - Joined names on planned costs
//! - Insert-time defaults for recurring tasks and upgrades

use homelogger_core::reference::ReferenceScope;
use homelogger_db::models::appliance::ApplianceInput;
use homelogger_db::models::budget_category::BudgetCategoryInput;
use homelogger_db::models::budget_scenario::BudgetScenarioInput;
use homelogger_db::models::note::{CreateNote, NoteFilter, UpdateNote};
use homelogger_db::models::planned_cost::PlannedCostInput;
use homelogger_db::models::recurring_task::RecurringTaskInput;
use homelogger_db::models::service_record::{CreateServiceRecord, ServiceKind};
use homelogger_db::models::todo::{CreateTodo, TodoFilter};
use homelogger_db::models::upgrade_project::UpgradeProjectInput;
use homelogger_db::repositories::{
    ApplianceRepo, BudgetCategoryRepo, BudgetScenarioRepo, NoteRepo, PlannedCostRepo,
    RecurringTaskRepo, ServiceRecordRepo, TodoRepo, UpgradeProjectRepo,
};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_appliance(name: &str) -> ApplianceInput {
    ApplianceInput {
        appliance_name: name.to_string(),
        manufacturer: "Acme".to_string(),
        model_number: "T-1".to_string(),
        serial_number: "SN1".to_string(),
        year_purchased: "2022".to_string(),
        purchase_price: "500".to_string(),
        location: "Kitchen".to_string(),
        appliance_type: "Appliance".to_string(),
    }
}

fn new_todo(label: &str, appliance_id: Option<i64>, space_type: Option<&str>) -> CreateTodo {
    CreateTodo {
        label: label.to_string(),
        checked: false,
        user_id: "user-1".to_string(),
        appliance_id,
        space_type: space_type.map(str::to_string),
    }
}

fn new_record(reference_type: &str, space: &str, appliance_id: Option<i64>) -> CreateServiceRecord {
    CreateServiceRecord {
        description: "Check filters".to_string(),
        date: "2026-02-28".to_string(),
        cost: 12.5,
        notes: "note".to_string(),
        space_type: space.to_string(),
        reference_type: reference_type.to_string(),
        appliance_id,
        attachment_ids: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Appliances
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_appliance_crud(pool: SqlitePool) {
    let created = ApplianceRepo::create(&pool, &new_appliance("Fridge")).await.unwrap();
    assert_eq!(created.appliance_name, "Fridge");
    assert_eq!(created.appliance_type, "Appliance");

    let found = ApplianceRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.serial_number, "SN1");

    let replacement = ApplianceInput {
        appliance_name: "Fridge 2".to_string(),
        ..Default::default()
    };
    let updated = ApplianceRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.appliance_name, "Fridge 2");
    assert_eq!(updated.manufacturer, "", "update replaces every field");

    assert_eq!(ApplianceRepo::list(&pool).await.unwrap().len(), 1);
    assert!(ApplianceRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ApplianceRepo::delete(&pool, created.id).await.unwrap());
    assert!(ApplianceRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_appliance_returns_none(pool: SqlitePool) {
    let result = ApplianceRepo::update(&pool, 999, &new_appliance("Ghost")).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Todos and notes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_todo_filters_combine(pool: SqlitePool) {
    TodoRepo::create(&pool, &new_todo("a", Some(1), Some("Kitchen"))).await.unwrap();
    TodoRepo::create(&pool, &new_todo("b", Some(1), None)).await.unwrap();
    TodoRepo::create(&pool, &new_todo("c", Some(2), Some("Kitchen"))).await.unwrap();
    TodoRepo::create(&pool, &new_todo("d", None, None)).await.unwrap();

    let all = TodoRepo::list(&pool, &TodoFilter::default()).await.unwrap();
    assert_eq!(all.len(), 4);

    let appliance = TodoRepo::list(
        &pool,
        &TodoFilter {
            appliance_id: Some(1),
            space_type: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(appliance.len(), 2);

    let both = TodoRepo::list(
        &pool,
        &TodoFilter {
            appliance_id: Some(1),
            space_type: Some("Kitchen".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].label, "a");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_todo_zero_appliance_and_empty_space_are_unscoped(pool: SqlitePool) {
    let todo = TodoRepo::create(&pool, &new_todo("x", Some(0), Some(""))).await.unwrap();
    assert_eq!(todo.appliance_id, None);
    assert_eq!(todo.space_type, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_todo_set_checked(pool: SqlitePool) {
    let todo = TodoRepo::create(&pool, &new_todo("x", None, None)).await.unwrap();
    assert!(!todo.checked);

    let updated = TodoRepo::set_checked(&pool, todo.id, true).await.unwrap().unwrap();
    assert!(updated.checked);
    assert!(TodoRepo::set_checked(&pool, 999, true).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_note_crud(pool: SqlitePool) {
    let note = NoteRepo::create(
        &pool,
        &CreateNote {
            title: "T1".to_string(),
            body: "body".to_string(),
            appliance_id: None,
            space_type: Some("Kitchen".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(note.space_type.as_deref(), Some("Kitchen"));

    let updated = NoteRepo::update(
        &pool,
        note.id,
        &UpdateNote {
            title: "T2".to_string(),
            body: "new body".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "T2");
    assert_eq!(updated.space_type.as_deref(), Some("Kitchen"));

    let kitchen = NoteRepo::list(
        &pool,
        &NoteFilter {
            appliance_id: None,
            space_type: Some("Kitchen".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(kitchen.len(), 1);

    assert!(NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(NoteRepo::find_by_id(&pool, note.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Maintenance and repair
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_service_records_are_scoped(pool: SqlitePool) {
    let kind = ServiceKind::Maintenance;
    ServiceRecordRepo::create(&pool, kind, &new_record("Space", "Attic", None)).await.unwrap();
    ServiceRecordRepo::create(&pool, kind, &new_record("Appliance", "Attic", Some(5))).await.unwrap();
    ServiceRecordRepo::create(&pool, kind, &new_record("Space", "Garage", None)).await.unwrap();

    let attic = ServiceRecordRepo::list_by_scope(&pool, kind, &ReferenceScope::Space("Attic".into()))
        .await
        .unwrap();
    assert_eq!(attic.len(), 1, "appliance records in the same space are excluded");
    assert_eq!(attic[0].reference_type, "Space");

    let appliance = ServiceRecordRepo::list_by_scope(&pool, kind, &ReferenceScope::Appliance(5))
        .await
        .unwrap();
    assert_eq!(appliance.len(), 1);
    assert_eq!(appliance[0].appliance_id, Some(5));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_maintenance_and_repair_tables_are_separate(pool: SqlitePool) {
    let m = ServiceRecordRepo::create(&pool, ServiceKind::Maintenance, &new_record("Space", "Attic", None))
        .await
        .unwrap();
    let r = ServiceRecordRepo::create(&pool, ServiceKind::Repair, &new_record("Space", "Attic", None))
        .await
        .unwrap();

    assert_eq!(m.cost, 12.5);
    assert_eq!(
        ServiceRecordRepo::list_costs(&pool, ServiceKind::Repair).await.unwrap(),
        vec![12.5]
    );

    assert!(ServiceRecordRepo::delete(&pool, ServiceKind::Repair, r.id).await.unwrap());
    assert!(ServiceRecordRepo::find_by_id(&pool, ServiceKind::Maintenance, m.id)
        .await
        .unwrap()
        .is_some());
    assert!(ServiceRecordRepo::list_costs(&pool, ServiceKind::Repair)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_planned_cost_joins_names(pool: SqlitePool) {
    let category = BudgetCategoryRepo::create(
        &pool,
        &BudgetCategoryInput {
            name: "HVAC".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let scenario = BudgetScenarioRepo::create(
        &pool,
        &BudgetScenarioInput {
            name: "Baseline".to_string(),
            horizon_months: 12,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let cost = PlannedCostRepo::create(
        &pool,
        &PlannedCostInput {
            scenario_id: Some(scenario.id),
            category_id: Some(category.id),
            cost_date: "2025-03-01".to_string(),
            amount: 250.0,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(cost.category_name.as_deref(), Some("HVAC"));
    assert_eq!(cost.scenario_name.as_deref(), Some("Baseline"));

    PlannedCostRepo::create(
        &pool,
        &PlannedCostInput {
            amount: 10.0,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(PlannedCostRepo::list(&pool, None).await.unwrap().len(), 2);
    assert_eq!(PlannedCostRepo::list(&pool, Some(scenario.id)).await.unwrap().len(), 1);

    // Deleting the category leaves a dangling reference with no name.
    assert!(BudgetCategoryRepo::delete(&pool, category.id).await.unwrap());
    let orphan = PlannedCostRepo::find_by_id(&pool, cost.id).await.unwrap().unwrap();
    assert_eq!(orphan.category_id, Some(category.id));
    assert_eq!(orphan.category_name, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_planned_cost_update_and_delete(pool: SqlitePool) {
    let cost = PlannedCostRepo::create(
        &pool,
        &PlannedCostInput {
            amount: 10.0,
            notes: "first".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = PlannedCostRepo::update(
        &pool,
        cost.id,
        &PlannedCostInput {
            amount: 20.0,
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.amount, 20.0);
    assert_eq!(updated.notes, "");

    assert!(PlannedCostRepo::update(&pool, 999, &PlannedCostInput::default())
        .await
        .unwrap()
        .is_none());
    assert!(PlannedCostRepo::delete(&pool, cost.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_scenario_update_replaces_fields(pool: SqlitePool) {
    let scenario = BudgetScenarioRepo::create(
        &pool,
        &BudgetScenarioInput {
            name: "Plan".to_string(),
            start_date: "2025-01-01".to_string(),
            horizon_months: 24,
            inflation_rate: 0.03,
            is_active: true,
            notes: "n".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(scenario.is_active);

    let updated = BudgetScenarioRepo::update(
        &pool,
        scenario.id,
        &BudgetScenarioInput {
            name: "Plan B".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Plan B");
    assert_eq!(updated.horizon_months, 0);
    assert!(!updated.is_active);
}

// ---------------------------------------------------------------------------
// Recurring tasks and upgrades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_recurring_task_insert_defaults(pool: SqlitePool) {
    let task = RecurringTaskRepo::create(
        &pool,
        &RecurringTaskInput {
            name: "Change filter".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(task.interval_value, 1);
    assert_eq!(task.interval_unit, "month");

    let explicit = RecurringTaskRepo::create(
        &pool,
        &RecurringTaskInput {
            name: "Gutters".to_string(),
            interval_value: 6,
            interval_unit: "week".to_string(),
            auto_create_todo: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(explicit.interval_value, 6);
    assert_eq!(explicit.interval_unit, "week");
    assert!(explicit.auto_create_todo);

    assert_eq!(RecurringTaskRepo::list(&pool).await.unwrap().len(), 2);
    assert!(RecurringTaskRepo::delete(&pool, task.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upgrade_project_status_default(pool: SqlitePool) {
    let project = UpgradeProjectRepo::create(
        &pool,
        &UpgradeProjectInput {
            title: "Heat pump".to_string(),
            estimated_cost: 12000.0,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(project.status, "planned");

    let updated = UpgradeProjectRepo::update(
        &pool,
        project.id,
        &UpgradeProjectInput {
            title: "Heat pump".to_string(),
            status: "in-progress".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.status, "in-progress");
    assert_eq!(updated.estimated_cost, 0.0);
}
