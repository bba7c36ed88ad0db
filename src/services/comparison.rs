//! Income vs projected expense comparison
//!
//! Derived whenever both a budget plan and a ledger projection exist.
//! Recomputation is explicit: the session calls `compare_to_income` after
//! every plan computation and every accepted expense, rather than relying
//! on an implicit reactive effect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surplus/deficit label determined by the sign of the net figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Balance {
    Surplus,
    Deficit,
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surplus => write!(f, "surplus"),
            Self::Deficit => write!(f, "deficit"),
        }
    }
}

/// Net position of the plan against projected yearly spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// `total_income - projected_yearly_expense`
    pub net: f64,

    /// Surplus when net is non-negative, deficit otherwise
    pub label: Balance,
}

/// Compare total income against the projected yearly expense
pub fn compare_to_income(total_income: f64, projected_yearly_expense: f64) -> ComparisonResult {
    let net = total_income - projected_yearly_expense;
    let label = if net >= 0.0 {
        Balance::Surplus
    } else {
        Balance::Deficit
    };
    ComparisonResult { net, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // totalIncome=950000, projectedYearlyExpense=78000
        let result = compare_to_income(950000.0, 78000.0);
        assert_eq!(result.net, 872000.0);
        assert_eq!(result.label, Balance::Surplus);
    }

    #[test]
    fn test_deficit() {
        let result = compare_to_income(100000.0, 150000.0);
        assert_eq!(result.net, -50000.0);
        assert_eq!(result.label, Balance::Deficit);
    }

    #[test]
    fn test_zero_net_is_surplus() {
        let result = compare_to_income(78000.0, 78000.0);
        assert_eq!(result.net, 0.0);
        assert_eq!(result.label, Balance::Surplus);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Balance::Surplus.to_string(), "surplus");
        assert_eq!(Balance::Deficit.to_string(), "deficit");
    }
}
