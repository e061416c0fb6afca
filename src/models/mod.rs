//! Core data models for pocket-ledger
//!
//! This module contains the data structures of the ledger: transactions,
//! budgets, their identifiers and the money type they are measured in, plus
//! the parsing rules for values typed in by a user.

pub mod budget;
pub mod ids;
pub mod input;
pub mod money;
pub mod transaction;

pub use budget::Budget;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
