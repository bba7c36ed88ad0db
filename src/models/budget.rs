//! Budget plan model
//!
//! A `BudgetPlan` is derived, never stored independently: it is a pure
//! function of the income sources at the moment `compute_plan` is invoked.
//! The split is the fixed 50/30/20 rule — essentials, lifestyle, savings.

use serde::{Deserialize, Serialize};

/// Share of total income allocated to essentials (needs)
pub const NEEDS_SHARE: f64 = 0.5;

/// Share of total income allocated to lifestyle (wants)
pub const WANTS_SHARE: f64 = 0.3;

/// Share of total income allocated to savings
pub const SAVINGS_SHARE: f64 = 0.2;

/// The suggested yearly plan derived from the income sources
///
/// Invariant: `needs + wants + savings == total_income` up to
/// floating-point rounding, with the components in ratio 50:30:20.
/// No rounding is applied here; rounding is a display concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    /// Sum of the three yearly income sources
    pub total_income: f64,

    /// Essentials: food, rent, utilities (50%)
    pub needs: f64,

    /// Lifestyle and leisure (30%)
    pub wants: f64,

    /// Future savings and emergency fund (20%)
    pub savings: f64,
}

impl BudgetPlan {
    /// The plan rows in display order as (label, amount, share) triples
    pub fn allocations(&self) -> [(&'static str, f64, f64); 3] {
        [
            ("Essentials", self.needs, NEEDS_SHARE),
            ("Lifestyle", self.wants, WANTS_SHARE),
            ("Savings", self.savings, SAVINGS_SHARE),
        ]
    }
}
