//! Budget plan display formatting

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{format_with_symbol, BudgetPlan};
use crate::services::{Balance, ComparisonResult};

use super::{format_bar, format_percentage};

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Allocation")]
    allocation: &'static str,

    #[tabled(rename = "Share")]
    share: String,

    #[tabled(rename = "Yearly Amount")]
    amount: String,

    #[tabled(rename = "")]
    bar: String,
}

/// Format the suggested yearly plan as a table
pub fn format_plan_table(plan: &BudgetPlan, currency_symbol: &str) -> String {
    let rows: Vec<PlanRow> = plan
        .allocations()
        .into_iter()
        .map(|(label, amount, share)| PlanRow {
            allocation: label,
            share: format_percentage(share * 100.0),
            amount: format_with_symbol(amount, currency_symbol),
            bar: format_bar(amount, plan.total_income, 20),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::sharp())
        .modify(Columns::single(2), Alignment::right())
        .to_string();

    format!(
        "Total Income: {}\n\n{}",
        format_with_symbol(plan.total_income, currency_symbol),
        table
    )
}

/// Format the surplus/deficit line shown under the plan
pub fn format_comparison(
    comparison: &ComparisonResult,
    projected_yearly_expense: f64,
    currency_symbol: &str,
) -> String {
    let label = match comparison.label {
        Balance::Surplus => "Surplus",
        Balance::Deficit => "Deficit",
    };

    format!(
        "Projected Yearly Expenses (monthly × 12): {}\n{}: {}",
        format_with_symbol(projected_yearly_expense, currency_symbol),
        label,
        format_with_symbol(comparison.net, currency_symbol)
    )
}
