//! Display formatting for terminal output
//!
//! Plain-text tables for transactions, monthly summaries and budgets.

pub mod report;
pub mod transaction;

pub use report::{format_budget_status, format_dashboard, format_monthly_summary};
pub use transaction::{format_transaction_details, format_transaction_register};
