//! Expense entry model
//!
//! Expenses are manually entered monthly spending records. An entry is
//! immutable once created and is appended to the ledger in submission
//! order; entries are never individually edited or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Rent,
    Bills,
    Other,
}

impl Category {
    /// All categories in selector display order
    pub fn all() -> &'static [Self] {
        &[Self::Food, Self::Rent, Self::Bills, Self::Other]
    }

    /// Category name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "rent" => Ok(Self::Rent),
            "bills" => Ok(Self::Bills),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error for an unrecognized category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected Food, Rent, Bills, or Other)",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

/// A single expense record in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// What the money was spent on
    pub title: String,

    /// Amount spent (positive, finite)
    pub amount: f64,

    /// Which category the expense falls under
    pub category: Category,

    /// When the entry was submitted
    pub created_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Create a new expense entry stamped with the current time
    ///
    /// The title is stored trimmed. Constraint checking happens in
    /// `validate`; the ledger refuses to append invalid entries.
    pub fn new(title: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            title: title.into().trim().to_string(),
            amount,
            category,
            created_at: Utc::now(),
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }
        if self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// Validation errors for expense entries
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    NonPositiveAmount(f64),
    NonFiniteAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::NonPositiveAmount(a) => {
                write!(f, "Expense amount must be positive (got {})", a)
            }
            Self::NonFiniteAmount => write!(f, "Expense amount must be finite"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_trims_title() {
        let entry = ExpenseEntry::new("  Groceries  ", 1000.0, Category::Food);
        assert_eq!(entry.title, "Groceries");
        assert_eq!(entry.amount, 1000.0);
        assert_eq!(entry.category, Category::Food);
    }

    #[test]
    fn test_validate_ok() {
        let entry = ExpenseEntry::new("Rent", 5000.0, Category::Rent);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let entry = ExpenseEntry::new("   ", 1000.0, Category::Food);
        assert_eq!(entry.validate(), Err(ExpenseValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_non_positive_amount() {
        let entry = ExpenseEntry::new("Snacks", 0.0, Category::Food);
        assert_eq!(
            entry.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(0.0))
        );

        let entry = ExpenseEntry::new("Snacks", -5.0, Category::Food);
        assert!(matches!(
            entry.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_validate_non_finite_amount() {
        let entry = ExpenseEntry::new("Snacks", f64::NAN, Category::Food);
        assert_eq!(
            entry.validate(),
            Err(ExpenseValidationError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("rent".parse::<Category>().unwrap(), Category::Rent);
        assert_eq!(" BILLS ".parse::<Category>().unwrap(), Category::Bills);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Food.to_string(), "Food");
        assert_eq!(Category::Other.to_string(), "Other");
    }

    #[test]
    fn test_category_all_order() {
        let all = Category::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Category::Food);
        assert_eq!(all[3], Category::Other);
    }

    #[test]
    fn test_serialization() {
        let entry = ExpenseEntry::new("Electricity", 1200.0, Category::Bills);
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: ExpenseEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
