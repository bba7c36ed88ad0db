//! Expense ledger service
//!
//! Holds the session's expense entries in submission order and derives
//! the running totals from them. The ledger is append-only: a rejected
//! submission leaves it untouched, and accepted entries are never edited
//! or removed.

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, ExpenseEntry};

/// Months in a year, for the naive yearly projection
const MONTHS_PER_YEAR: f64 = 12.0;

/// Derived view over the ledger at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    /// Sum of all entry amounts
    pub total_spent: f64,

    /// Per-category sums, in first-seen insertion order; categories with
    /// no entries do not appear
    pub category_totals: Vec<(Category, f64)>,

    /// Naive yearly extrapolation: current monthly total × 12
    ///
    /// Deliberately not a trailing average. Changing this formula changes
    /// the numbers users see, so it stays as-is.
    pub projected_yearly_expense: f64,
}

/// Ordered collection of expense entries for the current session
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    entries: Vec<ExpenseEntry>,
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an expense entry
    ///
    /// On any constraint violation (empty title, non-positive or
    /// non-finite amount) the ledger is unchanged and a `Validation`
    /// error is returned for the caller to surface.
    pub fn add_entry(
        &mut self,
        title: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> PlannerResult<()> {
        let entry = ExpenseEntry::new(title, amount, category);
        entry
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        debug!(title = %entry.title, amount, %category, "expense added");
        self.entries.push(entry);
        Ok(())
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute the derived totals over the current entries
    pub fn aggregate(&self) -> LedgerSummary {
        let total_spent: f64 = self.entries.iter().map(|e| e.amount).sum();

        let mut category_totals: Vec<(Category, f64)> = Vec::new();
        for entry in &self.entries {
            match category_totals.iter_mut().find(|(c, _)| *c == entry.category) {
                Some((_, sum)) => *sum += entry.amount,
                None => category_totals.push((entry.category, entry.amount)),
            }
        }

        LedgerSummary {
            total_spent,
            category_totals,
            projected_yearly_expense: total_spent * MONTHS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        ledger.add_entry("Groceries", 1000.0, Category::Food).unwrap();
        ledger.add_entry("House rent", 5000.0, Category::Rent).unwrap();
        ledger.add_entry("Snacks", 500.0, Category::Food).unwrap();
        ledger
    }

    #[test]
    fn test_reference_scenario() {
        // [(Food,1000),(Rent,5000),(Food,500)]
        let summary = sample_ledger().aggregate();

        assert_eq!(summary.total_spent, 6500.0);
        assert_eq!(
            summary.category_totals,
            vec![(Category::Food, 1500.0), (Category::Rent, 5000.0)]
        );
        assert_eq!(summary.projected_yearly_expense, 78000.0);
    }

    #[test]
    fn test_empty_ledger() {
        let summary = ExpenseLedger::new().aggregate();
        assert_eq!(summary.total_spent, 0.0);
        assert!(summary.category_totals.is_empty());
        assert_eq!(summary.projected_yearly_expense, 0.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let ledger = sample_ledger();
        let titles: Vec<&str> = ledger.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Groceries", "House rent", "Snacks"]);
    }

    #[test]
    fn test_category_totals_sum_to_total_spent() {
        let summary = sample_ledger().aggregate();
        let sum: f64 = summary.category_totals.iter().map(|(_, v)| v).sum();
        assert!((sum - summary.total_spent).abs() < 1e-9);
    }

    #[test]
    fn test_absent_categories_omitted() {
        let summary = sample_ledger().aggregate();
        assert!(!summary
            .category_totals
            .iter()
            .any(|(c, _)| *c == Category::Bills || *c == Category::Other));
    }

    #[test]
    fn test_append_batches_equivalent() {
        // Adding [A,B] then [C] equals adding [A,B,C] directly
        let mut batched = ExpenseLedger::new();
        batched.add_entry("A", 100.0, Category::Food).unwrap();
        batched.add_entry("B", 200.0, Category::Rent).unwrap();
        batched.add_entry("C", 300.0, Category::Bills).unwrap();

        let direct = {
            let mut l = ExpenseLedger::new();
            l.add_entry("A", 100.0, Category::Food).unwrap();
            l.add_entry("B", 200.0, Category::Rent).unwrap();
            l.add_entry("C", 300.0, Category::Bills).unwrap();
            l
        };

        assert_eq!(batched.aggregate(), direct.aggregate());
        assert_eq!(batched.len(), direct.len());
    }

    #[test]
    fn test_invalid_entry_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        let before = ledger.aggregate();

        assert!(ledger.add_entry("", 100.0, Category::Food).is_err());
        assert!(ledger.add_entry("Bad", 0.0, Category::Food).is_err());
        assert!(ledger.add_entry("Bad", -50.0, Category::Food).is_err());
        assert!(ledger.add_entry("Bad", f64::NAN, Category::Food).is_err());

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.aggregate(), before);
    }

    #[test]
    fn test_validation_error_kind() {
        let mut ledger = ExpenseLedger::new();
        let err = ledger.add_entry("  ", 100.0, Category::Food).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("title"));
    }
}
