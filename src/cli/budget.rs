//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::format_budget_status;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::input::{parse_amount, required_text};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create or update the monthly limit for a category
    Set {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "200" or "200.00")
        limit: String,
    },

    /// Show spending against every budget for the current month
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let category = required_text("category", Some(category.as_str()))?;
            let limit = parse_amount("limit", &limit)?;

            let budget = ledger.set_budget(&category, limit)?;
            println!(
                "Budget for {} set to {} ({} spent this month)",
                budget.category,
                budget.monthly_limit.format_with_symbol(symbol),
                budget.current_spent.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Status => {
            let today = ledger.today();
            let status = ledger.get_budget_status();
            println!("Budget status for {}", today.format("%Y-%m"));
            println!();
            print!("{}", format_budget_status(&status, symbol));
        }
    }

    Ok(())
}
