use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::api::{run_server, AppState};
use pocket_ledger::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ReportCommands, TransactionCommands,
};
use pocket_ledger::config::{paths::LedgerPaths, settings::Settings};
use pocket_ledger::ledger::Ledger;
use pocket_ledger::logging::{self, LogFormat};

#[derive(Parser)]
#[command(
    name = "ledger",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance ledger with monthly budgets",
    long_about = "pocket-ledger records income and expenses, tracks monthly \
                  budgets per category and reports balances and summaries. \
                  Run 'ledger serve' to expose the same data as a JSON API."
)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, global = true, env = "POCKET_LEDGER_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Serve the JSON API over HTTP
    Serve {
        /// Address to listen on (defaults to the configured server_addr)
        #[arg(long)]
        addr: Option<SocketAddr>,
    },

    /// Write the default configuration and an empty data file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let serving = matches!(cli.command, Some(Commands::Serve { .. }));
    if serving {
        logging::init(LogFormat::Json, "info");
    } else {
        logging::init(LogFormat::Compact, "warn");
    }

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = cli
        .data_file
        .clone()
        .unwrap_or_else(|| settings.data_file(&paths));

    let Some(command) = cli.command else {
        println!("pocket-ledger - personal finance ledger");
        println!();
        println!("Run 'ledger --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Transaction(cmd) => {
            let mut ledger = Ledger::open(&data_file);
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let mut ledger = Ledger::open(&data_file);
            handle_report_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            let mut ledger = Ledger::open(&data_file);
            handle_budget_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or(settings.server_addr);
            let state = AppState::new(Ledger::open(&data_file), settings.recent_limit);

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_server(state, addr))?;
        }
        Commands::Init => {
            println!("Initializing pocket-ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let ledger = Ledger::open(&data_file);
            if !data_file.exists() {
                ledger.save()?;
            }
            println!("Settings:  {}", paths.settings_file().display());
            println!("Data file: {}", data_file.display());
        }
        Commands::Config => {
            println!("pocket-ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Server address:  {}", settings.server_addr);
        }
    }

    Ok(())
}
