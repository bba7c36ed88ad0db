//! Income sources model
//!
//! The household's three yearly income figures. There is no relationship
//! between them beyond summation; each is an independent non-negative
//! yearly amount.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// The three yearly income sources entered on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct IncomeSources {
    /// Yearly arecanut crop revenue
    pub arecanut: f64,

    /// Yearly salary income
    pub salary: f64,

    /// Yearly coconut crop revenue
    pub coconut: f64,
}

impl IncomeSources {
    /// Create a new set of income sources
    pub fn new(arecanut: f64, salary: f64, coconut: f64) -> Self {
        Self {
            arecanut,
            salary,
            coconut,
        }
    }

    /// Total yearly income across all three sources
    pub fn total(&self) -> f64 {
        self.arecanut + self.salary + self.coconut
    }

    /// Validate that every figure is finite and non-negative
    ///
    /// The dashboard rejects garbage here instead of letting it propagate
    /// into the plan arithmetic.
    pub fn validate(&self) -> PlannerResult<()> {
        for (field, value) in [
            ("arecanut income", self.arecanut),
            ("salary income", self.salary),
            ("coconut income", self.coconut),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::invalid_income(field, value));
            }
        }
        Ok(())
    }
}
