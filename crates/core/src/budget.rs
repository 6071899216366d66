//! Budget and dashboard aggregation.
//!
//! Pure functions over already-fetched rows. Handlers load planned costs,
//! upgrades, recurring tasks and repair/maintenance costs, then hand plain
//! values in here. Nothing in this module touches the database or the clock;
//! callers pass `today` explicitly.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::types::{parse_date, DATE_FORMAT};

/// Category label for costs without a (named) category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Short look-ahead window in days.
pub const UPCOMING_SHORT_DAYS: i64 = 30;

/// Long look-ahead window in days.
pub const UPCOMING_LONG_DAYS: i64 = 90;

/// One planned cost as seen by the aggregations.
#[derive(Debug, Clone, Copy)]
pub struct CostLine<'a> {
    pub amount: f64,
    /// `YYYY-MM-DD`; empty or malformed dates are ignored by date windows.
    pub cost_date: &'a str,
    pub category_name: Option<&'a str>,
}

/// Total for one calendar month of the planning horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub total: f64,
}

/// Figures returned by the budget summary, minus the scenario echo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    pub total_planned: f64,
    pub monthly_savings: f64,
    pub upcoming_30_days: f64,
    pub upcoming_90_days: f64,
    pub planned_cost_count: usize,
    pub category_totals: BTreeMap<String, f64>,
    pub monthly_buckets: Vec<MonthBucket>,
}

/// Inputs for the dashboard beyond the planned costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardInput<'a> {
    pub upgrade_costs: &'a [f64],
    pub recurring_due_dates: &'a [&'a str],
    pub repair_costs: &'a [f64],
    pub maintenance_costs: &'a [f64],
}

/// Figures returned by the dashboard summary, minus scenario and dates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub monthly_savings: f64,
    pub planned_cost_total: f64,
    pub planned_cost_count: usize,
    #[serde(rename = "upcoming30DaysTotal")]
    pub upcoming_30_days_total: f64,
    pub overdue_total: f64,
    pub overdue_count: usize,
    pub upgrade_count: usize,
    pub upgrade_total: f64,
    pub recurring_count: usize,
    pub recurring_due_30: usize,
    pub repair_total: f64,
    pub maintenance_total: f64,
}

/// Pick the horizon: an explicit non-zero request wins, otherwise the
/// scenario's own horizon, otherwise zero.
pub fn resolve_horizon(requested: Option<i32>, scenario_horizon: Option<i32>) -> i32 {
    match requested {
        Some(months) if months != 0 => months,
        _ => scenario_horizon.unwrap_or(0),
    }
}

/// First month of the bucket series: the scenario start when it parses,
/// otherwise today.
pub fn resolve_start_date(scenario_start: Option<&str>, today: NaiveDate) -> NaiveDate {
    scenario_start.and_then(parse_date).unwrap_or(today)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn monthly_savings(total: f64, horizon_months: i32) -> f64 {
    if horizon_months > 0 {
        total / f64::from(horizon_months)
    } else {
        0.0
    }
}

/// `YYYY-MM` key of the month `offset` months after `start`.
pub fn month_key(start: NaiveDate, offset: i32) -> String {
    let index = start.year() * 12 + start.month0() as i32 + offset;
    format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1)
}

fn within_window(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    date > today && date <= today + Duration::days(days)
}

pub fn summarize_budget(
    costs: &[CostLine<'_>],
    today: NaiveDate,
    start: NaiveDate,
    horizon_months: i32,
) -> BudgetTotals {
    let mut total_planned = 0.0;
    let mut upcoming_30_days = 0.0;
    let mut upcoming_90_days = 0.0;
    let mut category_totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();

    for cost in costs {
        total_planned += cost.amount;

        let category = cost
            .category_name
            .filter(|name| !name.is_empty())
            .unwrap_or(UNCATEGORIZED);
        *category_totals.entry(category.to_string()).or_default() += cost.amount;

        if let Some(date) = parse_date(cost.cost_date) {
            *by_month.entry(month_key(date, 0)).or_default() += cost.amount;
            if within_window(date, today, UPCOMING_SHORT_DAYS) {
                upcoming_30_days += cost.amount;
            }
            if within_window(date, today, UPCOMING_LONG_DAYS) {
                upcoming_90_days += cost.amount;
            }
        }
    }

    let monthly_buckets = (0..horizon_months.max(0))
        .map(|offset| {
            let month = month_key(start, offset);
            let total = by_month.get(&month).copied().unwrap_or(0.0);
            MonthBucket { month, total }
        })
        .collect();

    BudgetTotals {
        total_planned,
        monthly_savings: monthly_savings(total_planned, horizon_months),
        upcoming_30_days,
        upcoming_90_days,
        planned_cost_count: costs.len(),
        category_totals,
        monthly_buckets,
    }
}

/// Overdue costs are dated on or before today; upcoming ones fall after
/// today and within the short window.
pub fn summarize_dashboard(
    costs: &[CostLine<'_>],
    input: &DashboardInput<'_>,
    today: NaiveDate,
    horizon_months: i32,
) -> DashboardTotals {
    let mut planned_cost_total = 0.0;
    let mut upcoming_30_days_total = 0.0;
    let mut overdue_total = 0.0;
    let mut overdue_count = 0;

    for cost in costs {
        planned_cost_total += cost.amount;
        match parse_date(cost.cost_date) {
            Some(date) if date <= today => {
                overdue_total += cost.amount;
                overdue_count += 1;
            }
            Some(date) if within_window(date, today, UPCOMING_SHORT_DAYS) => {
                upcoming_30_days_total += cost.amount;
            }
            _ => {}
        }
    }

    let due_limit = today + Duration::days(UPCOMING_SHORT_DAYS);
    let recurring_due_30 = input
        .recurring_due_dates
        .iter()
        .filter_map(|raw| parse_date(raw))
        .filter(|date| *date <= due_limit)
        .count();

    DashboardTotals {
        monthly_savings: monthly_savings(planned_cost_total, horizon_months),
        planned_cost_total,
        planned_cost_count: costs.len(),
        upcoming_30_days_total,
        overdue_total,
        overdue_count,
        upgrade_count: input.upgrade_costs.len(),
        upgrade_total: input.upgrade_costs.iter().sum(),
        recurring_count: input.recurring_due_dates.len(),
        recurring_due_30,
        repair_total: input.repair_costs.iter().sum(),
        maintenance_total: input.maintenance_costs.iter().sum(),
    }
}
