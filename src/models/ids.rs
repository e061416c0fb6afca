//! Transaction identifiers
//!
//! Ids have the form `{type}_{sequence}_{yyyymmdd}`, e.g. `expense_3_20240301`.
//! The sequence number is handed out by the ledger and never reused within a
//! loaded ledger, so ids stay unique after deletions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction::TransactionType;

/// Identifier of a single transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Build an id from its parts
    pub fn generate(kind: TransactionType, sequence: u64, date: NaiveDate) -> Self {
        Self(format!("{}_{}_{}", kind, sequence, date.format("%Y%m%d")))
    }

    /// The sequence number embedded in the id, if it follows the generated form
    ///
    /// Ids loaded from a hand-edited file may not; those are simply skipped
    /// when working out the next free sequence number.
    pub fn sequence(&self) -> Option<u64> {
        let mut parts = self.0.split('_');
        let _kind = parts.next()?;
        let sequence = parts.next()?.parse().ok()?;
        parts.next()?;
        Some(sequence)
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for TransactionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let id = TransactionId::generate(TransactionType::Expense, 3, date);
        assert_eq!(id.as_str(), "expense_3_20240301");
        assert_eq!(id.sequence(), Some(3));
    }

    #[test]
    fn test_sequence_of_foreign_ids() {
        assert_eq!(TransactionId::from("imported").sequence(), None);
        assert_eq!(TransactionId::from("income_x_20240101").sequence(), None);
        assert_eq!(TransactionId::from("income_7").sequence(), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = TransactionId::from("income_1_20240315");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"income_1_20240315\"");
    }
}
