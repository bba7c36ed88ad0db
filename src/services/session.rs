//! Session-scoped planner state
//!
//! One `PlannerSession` holds everything the dashboard shows: the income
//! figures, the latest computed plan, the expense ledger, the comparison,
//! and the prediction state. It is created at startup, passed explicitly
//! to whatever needs it, and dropped when the process exits — nothing is
//! persisted.

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetPlan, Category, ExpenseEntry, IncomeSources};
use crate::predict::prediction_history;
use crate::services::allocator::compute_plan;
use crate::services::comparison::{compare_to_income, ComparisonResult};
use crate::services::ledger::{ExpenseLedger, LedgerSummary};

/// Lifecycle of the next-month prediction
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionState {
    /// No prediction requested yet
    #[default]
    Idle,

    /// A request is in flight; the rest of the session stays interactive
    Pending,

    /// The service returned a predicted next-month expense
    Ready(f64),

    /// The call failed; shown instead of a stale number
    Unavailable(String),
}

/// All in-memory state for one planning session
#[derive(Debug, Default)]
pub struct PlannerSession {
    income: IncomeSources,
    plan: Option<BudgetPlan>,
    ledger: ExpenseLedger,
    comparison: Option<ComparisonResult>,
    prediction: PredictionState,
}

impl PlannerSession {
    /// Create a fresh session with no plan, no expenses, no prediction
    pub fn new() -> Self {
        Self::default()
    }

    /// The current income figures
    pub fn income(&self) -> &IncomeSources {
        &self.income
    }

    /// Replace the income figures without computing a plan
    ///
    /// Mirrors typing into the income fields: nothing is derived until
    /// the user explicitly asks for a plan.
    pub fn set_income(&mut self, income: IncomeSources) {
        self.income = income;
    }

    /// Compute the 50/30/20 plan from the current income figures
    ///
    /// On success the plan is stored and the comparison is recomputed
    /// against the current ledger. On `InvalidInput` the previous plan
    /// and comparison are kept untouched.
    pub fn compute_plan(&mut self) -> PlannerResult<BudgetPlan> {
        let plan = compute_plan(&self.income)?;
        self.plan = Some(plan);
        self.refresh_comparison();
        Ok(plan)
    }

    /// The latest computed plan, if any
    pub fn plan(&self) -> Option<&BudgetPlan> {
        self.plan.as_ref()
    }

    /// Add an expense to the ledger and recompute the comparison
    pub fn add_expense(
        &mut self,
        title: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> PlannerResult<()> {
        self.ledger.add_entry(title, amount, category)?;
        self.refresh_comparison();
        Ok(())
    }

    /// The expense entries in insertion order
    pub fn expenses(&self) -> &[ExpenseEntry] {
        self.ledger.entries()
    }

    /// Derived totals over the current ledger
    pub fn ledger_summary(&self) -> LedgerSummary {
        self.ledger.aggregate()
    }

    /// The latest comparison, present once a plan has been computed
    pub fn comparison(&self) -> Option<&ComparisonResult> {
        self.comparison.as_ref()
    }

    /// Current prediction state
    pub fn prediction(&self) -> &PredictionState {
        &self.prediction
    }

    /// The six-element history to send to the prediction service
    ///
    /// Five fixed historical placeholders plus the current total spent,
    /// oldest to newest.
    pub fn prediction_history(&self) -> [f64; 6] {
        prediction_history(self.ledger.aggregate().total_spent)
    }

    /// Mark a prediction request as in flight
    pub fn begin_prediction(&mut self) {
        self.prediction = PredictionState::Pending;
    }

    /// Record the outcome of a prediction request
    ///
    /// A failure replaces whatever was shown before; a stale previous
    /// value is never left on display.
    pub fn finish_prediction(&mut self, outcome: Result<f64, PlannerError>) {
        self.prediction = match outcome {
            Ok(value) => {
                debug!(value, "prediction ready");
                PredictionState::Ready(value)
            }
            Err(err) => PredictionState::Unavailable(err.to_string()),
        };
    }

    /// Recompute the comparison from the latest plan and ledger
    ///
    /// Called after every accepted expense and every plan computation,
    /// making the original's implicit reactive effect an explicit,
    /// deterministic step.
    fn refresh_comparison(&mut self) {
        self.comparison = self.plan.map(|plan| {
            let summary = self.ledger.aggregate();
            compare_to_income(plan.total_income, summary.projected_yearly_expense)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::comparison::Balance;

    fn session_with_plan() -> PlannerSession {
        let mut session = PlannerSession::new();
        session.set_income(IncomeSources::new(650000.0, 180000.0, 120000.0));
        session.compute_plan().unwrap();
        session
    }

    #[test]
    fn test_plan_then_expenses_updates_comparison() {
        let mut session = session_with_plan();

        session.add_expense("Groceries", 1000.0, Category::Food).unwrap();
        session.add_expense("House rent", 5000.0, Category::Rent).unwrap();
        session.add_expense("Snacks", 500.0, Category::Food).unwrap();

        let comparison = session.comparison().unwrap();
        assert_eq!(comparison.net, 872000.0);
        assert_eq!(comparison.label, Balance::Surplus);
    }

    #[test]
    fn test_comparison_absent_without_plan() {
        let mut session = PlannerSession::new();
        session.add_expense("Groceries", 1000.0, Category::Food).unwrap();
        assert!(session.comparison().is_none());
    }

    #[test]
    fn test_comparison_recomputed_on_plan() {
        let mut session = PlannerSession::new();
        session.add_expense("Rent", 10000.0, Category::Rent).unwrap();

        session.set_income(IncomeSources::new(100000.0, 0.0, 0.0));
        session.compute_plan().unwrap();

        // 100000 - 120000 projected
        let comparison = session.comparison().unwrap();
        assert_eq!(comparison.net, -20000.0);
        assert_eq!(comparison.label, Balance::Deficit);
    }

    #[test]
    fn test_invalid_income_keeps_previous_plan() {
        let mut session = session_with_plan();
        let previous = *session.plan().unwrap();

        session.set_income(IncomeSources::new(-1.0, 0.0, 0.0));
        assert!(session.compute_plan().is_err());

        assert_eq!(session.plan(), Some(&previous));
    }

    #[test]
    fn test_rejected_expense_leaves_state_unchanged() {
        let mut session = session_with_plan();
        session.add_expense("Groceries", 1000.0, Category::Food).unwrap();
        let before = *session.comparison().unwrap();

        assert!(session.add_expense("", 100.0, Category::Food).is_err());
        assert!(session.add_expense("Bad", -5.0, Category::Food).is_err());

        assert_eq!(session.expenses().len(), 1);
        assert_eq!(session.comparison(), Some(&before));
    }

    #[test]
    fn test_prediction_history_shape() {
        let mut session = PlannerSession::new();
        session.add_expense("Groceries", 1000.0, Category::Food).unwrap();
        session.add_expense("House rent", 5000.0, Category::Rent).unwrap();
        session.add_expense("Snacks", 500.0, Category::Food).unwrap();

        let history = session.prediction_history();
        assert_eq!(
            history,
            [20000.0, 22000.0, 24000.0, 26000.0, 28000.0, 6500.0]
        );
    }

    #[test]
    fn test_prediction_lifecycle() {
        let mut session = PlannerSession::new();
        assert_eq!(session.prediction(), &PredictionState::Idle);

        session.begin_prediction();
        assert_eq!(session.prediction(), &PredictionState::Pending);

        session.finish_prediction(Ok(27500.0));
        assert_eq!(session.prediction(), &PredictionState::Ready(27500.0));
    }

    #[test]
    fn test_prediction_failure_replaces_value() {
        let mut session = PlannerSession::new();
        session.finish_prediction(Ok(27500.0));

        session.begin_prediction();
        session.finish_prediction(Err(PlannerError::PredictionUnavailable(
            "connection refused".into(),
        )));

        match session.prediction() {
            PredictionState::Unavailable(reason) => {
                assert!(reason.contains("connection refused"));
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }
}
