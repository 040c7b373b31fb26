//! Dashboard KPI computation over the fact table

use margin_domain::Table;
use margin_facts::{demo_kpis, Kpi};
use std::collections::HashSet;

/// Compute the dashboard KPIs from a fact table, falling back to the demo
/// values when no data is available.
pub fn compute_kpis(facts: &Table) -> Vec<Kpi> {
    if facts.is_empty() || facts.rows.is_empty() {
        return demo_kpis();
    }

    let revenue = sum_where(facts, "Net Sales", "Actual");
    let revenue_plan = sum_where(facts, "Net Sales", "Plan");
    let labor = sum_where(facts, "Labor", "Actual");
    let labor_plan = sum_where(facts, "Labor", "Plan");
    let profit = sum_where(facts, "Controllable Profit", "Actual");
    let profit_plan = sum_where(facts, "Controllable Profit", "Plan");

    let revenue_change = pct_change(revenue, revenue_plan);
    let labor_pct = pct_of(labor, revenue);
    let labor_pct_plan = pct_of(labor_plan, revenue_plan);
    let profit_margin = pct_of(profit, revenue);
    let profit_margin_plan = pct_of(profit_plan, revenue_plan);

    let store_count = facts
        .rows
        .iter()
        .enumerate()
        .filter_map(|(idx, _)| facts.value(idx, "Store"))
        .collect::<HashSet<_>>()
        .len();

    vec![
        Kpi {
            name: "Revenue".to_string(),
            value: revenue,
            change: revenue_change,
            period: "vs plan".to_string(),
        },
        Kpi {
            name: "Profit Margin".to_string(),
            value: profit_margin,
            change: profit_margin - profit_margin_plan,
            period: "vs plan".to_string(),
        },
        Kpi {
            name: "Labor %".to_string(),
            value: labor_pct,
            change: labor_pct - labor_pct_plan,
            period: "vs plan".to_string(),
        },
        Kpi {
            name: "Stores Reporting".to_string(),
            value: store_count as f64,
            change: 0.0,
            period: "current".to_string(),
        },
    ]
}

/// Sum a numeric column over rows with the given `Type`
fn sum_where(facts: &Table, type_value: &str, value_column: &str) -> f64 {
    (0..facts.rows.len())
        .filter(|&row| facts.value(row, "Type") == Some(type_value))
        .filter_map(|row| facts.numeric(row, value_column))
        .sum()
}

fn pct_change(actual: f64, plan: f64) -> f64 {
    if plan != 0.0 {
        (actual - plan) / plan * 100.0
    } else {
        0.0
    }
}

fn pct_of(part: f64, whole: f64) -> f64 {
    if whole != 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
