//! Transaction display formatting
//!
//! Formats transactions as a register (one row per transaction) and as a
//! detail view.

use crate::models::{Money, Transaction, TransactionType};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let marker = match txn.transaction_type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    format!(
        "{} {:<24} {:10} {:16} {:>12}",
        marker,
        truncate(txn.id.as_str(), 24),
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 16),
        txn.amount.format_with_symbol(symbol),
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<24} {:10} {:16} {:>12}\n",
        "ID", "Date", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(67));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    let net: Money = transactions.iter().map(|t| t.signed_amount()).sum();
    output.push_str(&"-".repeat(67));
    output.push('\n');
    output.push_str(&format!(
        "  {:<24} {:10} {:16} {:>12}\n",
        "",
        "",
        "Net",
        net.format_with_symbol(symbol)
    ));

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

/// Truncate a string to a maximum length, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
