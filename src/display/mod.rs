//! Terminal output formatting
//!
//! Table and text rendering for the one-shot CLI commands. The TUI has
//! its own widgets; this layer is plain strings for stdout.

pub mod ledger;
pub mod plan;

pub use ledger::{format_expense_table, format_ledger_summary};
pub use plan::{format_comparison, format_plan_table};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
