//! Expense ledger display formatting

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{format_with_symbol, ExpenseEntry};
use crate::services::LedgerSummary;

use super::format_bar;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Title")]
    title: String,

    #[tabled(rename = "Category")]
    category: String,

    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the expense entries as a table, in insertion order
pub fn format_expense_table(entries: &[ExpenseEntry], currency_symbol: &str) -> String {
    if entries.is_empty() {
        return "No expenses recorded this month.".to_string();
    }

    let rows: Vec<ExpenseRow> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| ExpenseRow {
            index: i + 1,
            title: entry.title.clone(),
            category: entry.category.to_string(),
            amount: format_with_symbol(entry.amount, currency_symbol),
        })
        .collect();

    Table::new(rows)
        .with(Style::sharp())
        .modify(Columns::single(3), Alignment::right())
        .to_string()
}

/// Format the derived totals: total spent, per-category breakdown, projection
pub fn format_ledger_summary(summary: &LedgerSummary, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Spent: {}\n",
        format_with_symbol(summary.total_spent, currency_symbol)
    ));

    if !summary.category_totals.is_empty() {
        output.push('\n');
        for (category, total) in &summary.category_totals {
            output.push_str(&format!(
                "  {:<8} {:>14}  {}\n",
                category.to_string(),
                format_with_symbol(*total, currency_symbol),
                format_bar(*total, summary.total_spent, 20)
            ));
        }
    }

    output.push_str(&format!(
        "\nProjected Yearly Expenses (monthly × 12): {}\n",
        format_with_symbol(summary.projected_yearly_expense, currency_symbol)
    ));

    output
}
