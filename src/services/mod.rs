//! Business logic layer
//!
//! Pure computation over the session state: plan allocation, the expense
//! ledger, the income comparison, and the session object that ties them
//! together.

pub mod allocator;
pub mod comparison;
pub mod ledger;
pub mod session;

pub use allocator::compute_plan;
pub use comparison::{compare_to_income, Balance, ComparisonResult};
pub use ledger::{ExpenseLedger, LedgerSummary};
pub use session::{PlannerSession, PredictionState};
