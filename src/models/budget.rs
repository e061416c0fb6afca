//! Budget model
//!
//! A monthly spending ceiling for one category. `current_spent` is a cached
//! aggregate; the ledger refreshes it from the transaction list before it is
//! reported.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this budget applies to (unique)
    pub category: String,

    /// Intended monthly ceiling
    pub monthly_limit: Money,

    /// Expenses in this category during the current month (cached)
    #[serde(default)]
    pub current_spent: Money,
}

impl Budget {
    /// Create a new budget with nothing spent yet
    pub fn new(category: impl Into<String>, monthly_limit: Money) -> Self {
        Self {
            category: category.into(),
            monthly_limit,
            current_spent: Money::zero(),
        }
    }

    /// Limit minus spent; negative when over budget
    pub fn remaining(&self) -> Money {
        self.monthly_limit - self.current_spent
    }

    /// Spent as a percentage of the limit (0 for a zero or negative limit)
    pub fn percentage(&self) -> f64 {
        self.current_spent.percent_of(self.monthly_limit)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining().is_negative()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {}",
            self.category, self.current_spent, self.monthly_limit
        )
    }
}
