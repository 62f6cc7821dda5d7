//! The closed set of transaction categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::TallyError;

/// Classifies a transaction's direction of money flow.
///
/// The set is closed: adding a category is a code change, not a runtime
/// operation. Variants are declared in the fixed presentation order, so the
/// derived `Ord` is the order data points use within a month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Income,
    Expense,
    Savings,
}

impl Category {
    /// Every category, in fixed presentation order.
    pub const ALL: [Category; 3] = [Category::Income, Category::Expense, Category::Savings];

    /// Stable identifier used for display, persistence, and group keys.
    ///
    /// Identifiers may be persisted; they must never be reused for a
    /// different variant across versions.
    pub fn identifier(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
            Category::Savings => "Savings",
        }
    }

    /// Resolves a raw identifier to its category.
    ///
    /// Matching is exact and case-sensitive; anything outside the closed set
    /// fails with [`TallyError::UnknownCategory`].
    pub fn from_identifier(raw: &str) -> Result<Category, TallyError> {
        match raw {
            "Income" => Ok(Category::Income),
            "Expense" => Ok(Category::Expense),
            "Savings" => Ok(Category::Savings),
            _ => Err(TallyError::UnknownCategory {
                identifier: raw.to_string(),
                record_id: None,
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
