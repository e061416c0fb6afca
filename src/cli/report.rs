//! Report CLI commands
//!
//! Balance, monthly summary and the dashboard view.

use chrono::Datelike;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::{format_dashboard, format_monthly_summary};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::input::parse_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the current balance
    Balance,

    /// Income and expenses for one month
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Balance, budgets, this month's summary and recent transactions
    Dashboard,
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Balance => {
            println!("{}", ledger.get_balance().format_with_symbol(symbol));
        }

        ReportCommands::Summary { month } => {
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => {
                    let today = ledger.today();
                    (today.year(), today.month())
                }
            };
            let summary = ledger.get_monthly_summary(year, month);
            print!("{}", format_monthly_summary(&summary, symbol));
        }

        ReportCommands::Dashboard => {
            let dashboard = ledger.dashboard(settings.recent_limit);
            print!("{}", format_dashboard(&dashboard, symbol));
        }
    }

    Ok(())
}
