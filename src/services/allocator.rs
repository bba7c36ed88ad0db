//! Budget allocator service
//!
//! Computes the suggested 50/30/20 yearly plan from the income sources.
//! The computation is pure and runs only when explicitly invoked, never
//! reactively on input changes.

use crate::error::PlannerResult;
use crate::models::{BudgetPlan, IncomeSources, NEEDS_SHARE, SAVINGS_SHARE, WANTS_SHARE};

/// Compute the suggested budget plan from the three income sources
///
/// Rejects negative or non-finite figures with `InvalidInput` before any
/// arithmetic runs. The split itself is unrounded f64 arithmetic:
/// `needs + wants + savings` equals the total up to floating-point
/// rounding.
pub fn compute_plan(income: &IncomeSources) -> PlannerResult<BudgetPlan> {
    income.validate()?;

    let total_income = income.total();
    Ok(BudgetPlan {
        total_income,
        needs: total_income * NEEDS_SHARE,
        wants: total_income * WANTS_SHARE,
        savings: total_income * SAVINGS_SHARE,
    })
}
