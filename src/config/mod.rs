//! Configuration module for pocket-ledger
//!
//! This module provides configuration management including:
//! - base directory and data file resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
