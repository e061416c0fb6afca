//! pocket-ledger - personal finance ledger
//!
//! This library records income and expense transactions, tracks monthly
//! budgets per category and reports balances and summaries. State lives in a
//! single JSON file that is rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budgets)
//! - `storage`: JSON file storage layer
//! - `ledger`: The ledger itself and the reports derived from it
//! - `display`: Plain-text formatting for the terminal
//! - `cli`: Command handlers for the `ledger` binary
//! - `api`: JSON API served over HTTP
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use pocket_ledger::ledger::Ledger;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::open(settings.data_file(&paths));
//! println!("{}", ledger.get_balance());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
