//! Transaction CLI commands
//!
//! Add, delete, list and inspect transactions.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::input::{parse_amount, parse_optional_date, required_text};
use crate::models::TransactionType;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// "income" or "expense"
        transaction_type: String,
        /// Amount (e.g., "50" or "12.99")
        amount: String,
        /// Category label
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },
    /// List the most recent transactions
    #[command(alias = "ls")]
    List {
        /// Number of transactions to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            transaction_type,
            amount,
            category,
            description,
            date,
        } => {
            let transaction_type: TransactionType = transaction_type.parse()?;
            let amount = parse_amount("amount", &amount)?;
            let category = required_text("category", Some(category.as_str()))?;
            let date = parse_optional_date(date.as_deref())?;

            let txn = ledger.add_transaction(
                amount,
                &category,
                description.trim(),
                transaction_type,
                date,
            )?;

            println!(
                "Added {} {}: {} ({})",
                txn.transaction_type,
                txn.id,
                txn.amount.format_with_symbol(symbol),
                txn.category
            );
            println!("Balance: {}", ledger.get_balance().format_with_symbol(symbol));
        }

        TransactionCommands::Delete { id } => {
            if !ledger.delete_transaction(&id)? {
                return Err(LedgerError::transaction_not_found(id));
            }
            println!("Deleted transaction {}", id);
            println!("Balance: {}", ledger.get_balance().format_with_symbol(symbol));
        }

        TransactionCommands::List { limit } => {
            let limit = limit.unwrap_or(settings.recent_limit);
            let recent = ledger.get_recent_transactions(limit);
            print!("{}", format_transaction_register(&recent, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = ledger
                .find_transaction(&id)
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(txn, symbol));
        }
    }

    Ok(())
}
