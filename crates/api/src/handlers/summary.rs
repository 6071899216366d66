//! Budget and dashboard summaries.
//!
//! Both load rows through the repositories and hand them to
//! `homelogger_core::budget` for the arithmetic. "Today" is the server's
//! local date.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use homelogger_core::budget::{
    format_date, resolve_horizon, resolve_start_date, summarize_budget, summarize_dashboard,
    BudgetTotals, CostLine, DashboardInput, DashboardTotals,
};
use homelogger_db::models::budget_scenario::BudgetScenario;
use homelogger_db::models::planned_cost::PlannedCost;
use homelogger_db::models::service_record::ServiceKind;
use homelogger_db::repositories::{
    BudgetScenarioRepo, PlannedCostRepo, RecurringTaskRepo, ServiceRecordRepo, UpgradeProjectRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::{ApiQuery, SummaryParams};
use crate::state::AppState;

/// Response of `GET /budget/summary`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// `null` when no scenario was requested or it does not exist.
    pub scenario: Option<BudgetScenario>,
    pub horizon_months: i32,
    #[serde(flatten)]
    pub totals: BudgetTotals,
}

/// Response of `GET /dashboard/summary`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub scenario: Option<BudgetScenario>,
    pub horizon_months: i32,
    pub start_date: String,
    #[serde(flatten)]
    pub totals: DashboardTotals,
}

/// Scenario, horizon, start date and planned costs shared by both summaries.
struct SummaryContext {
    scenario: Option<BudgetScenario>,
    horizon_months: i32,
    start_date: NaiveDate,
    planned_costs: Vec<PlannedCost>,
}

async fn load_context(
    state: &AppState,
    params: &SummaryParams,
    today: NaiveDate,
) -> AppResult<SummaryContext> {
    let scenario_id = params.scenario_id.filter(|id| *id != 0);
    let scenario = match scenario_id {
        Some(id) => BudgetScenarioRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    if let (Some(id), None) = (scenario_id, &scenario) {
        tracing::debug!(scenario_id = id, "Summary requested for unknown scenario");
    }

    let horizon_months = resolve_horizon(
        params.horizon_months,
        scenario.as_ref().map(|s| s.horizon_months),
    );
    let start_date = resolve_start_date(scenario.as_ref().map(|s| s.start_date.as_str()), today);
    let planned_costs = PlannedCostRepo::list(&state.pool, scenario_id).await?;

    Ok(SummaryContext {
        scenario,
        horizon_months,
        start_date,
        planned_costs,
    })
}

fn cost_lines(costs: &[PlannedCost]) -> Vec<CostLine<'_>> {
    costs
        .iter()
        .map(|cost| CostLine {
            amount: cost.amount,
            cost_date: &cost.cost_date,
            category_name: cost.category_name.as_deref(),
        })
        .collect()
}

/// GET /budget/summary?scenarioId=&horizonMonths=
pub async fn budget(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SummaryParams>,
) -> AppResult<Json<BudgetSummary>> {
    let today = chrono::Local::now().date_naive();
    let ctx = load_context(&state, &params, today).await?;

    let totals = summarize_budget(
        &cost_lines(&ctx.planned_costs),
        today,
        ctx.start_date,
        ctx.horizon_months,
    );

    Ok(Json(BudgetSummary {
        scenario: ctx.scenario,
        horizon_months: ctx.horizon_months,
        totals,
    }))
}

/// GET /dashboard/summary?scenarioId=&horizonMonths=
pub async fn dashboard(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SummaryParams>,
) -> AppResult<Json<DashboardSummary>> {
    let today = chrono::Local::now().date_naive();
    let ctx = load_context(&state, &params, today).await?;

    let upgrades = UpgradeProjectRepo::list(&state.pool).await?;
    let recurring = RecurringTaskRepo::list(&state.pool).await?;
    let repair_costs = ServiceRecordRepo::list_costs(&state.pool, ServiceKind::Repair).await?;
    let maintenance_costs =
        ServiceRecordRepo::list_costs(&state.pool, ServiceKind::Maintenance).await?;

    let upgrade_costs: Vec<f64> = upgrades.iter().map(|u| u.estimated_cost).collect();
    let recurring_due_dates: Vec<&str> = recurring.iter().map(|r| r.next_due_date.as_str()).collect();

    let input = DashboardInput {
        upgrade_costs: &upgrade_costs,
        recurring_due_dates: &recurring_due_dates,
        repair_costs: &repair_costs,
        maintenance_costs: &maintenance_costs,
    };
    let totals = summarize_dashboard(
        &cost_lines(&ctx.planned_costs),
        &input,
        today,
        ctx.horizon_months,
    );

    Ok(Json(DashboardSummary {
        scenario: ctx.scenario,
        horizon_months: ctx.horizon_months,
        start_date: format_date(ctx.start_date),
        totals,
    }))
}
