//! Transaction model
//!
//! Represents a single income or expense entry. Transactions are immutable
//! once recorded; the only way to change one is to delete it and add a new one.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::LedgerError;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Lowercase name, as used in ids and in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Unknown transaction type '{}'. Use 'income' or 'expense'",
                other
            ))),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (`{type}_{sequence}_{yyyymmdd}`)
    pub id: TransactionId,

    /// Day the transaction happened
    pub date: NaiveDate,

    /// Non-negative amount; direction comes from `transaction_type`
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    /// Free-form notes, may be empty
    #[serde(default)]
    pub description: String,

    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
            description: description.into(),
            transaction_type,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Check if the transaction falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Amount with the sign applied (positive for income, negative for expenses)
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.signed_amount()
        )
    }
}
