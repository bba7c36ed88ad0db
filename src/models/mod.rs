//! Core data models
//!
//! The value types the planner computes over: income sources, the derived
//! budget plan, expense entries, and amount parsing/formatting.

pub mod amount;
pub mod budget;
pub mod expense;
pub mod income;

pub use amount::{format_amount, format_with_symbol, parse_amount, AmountParseError};
pub use budget::{BudgetPlan, NEEDS_SHARE, SAVINGS_SHARE, WANTS_SHARE};
pub use expense::{Category, CategoryParseError, ExpenseEntry, ExpenseValidationError};
pub use income::IncomeSources;
