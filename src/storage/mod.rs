//! Storage layer for pocket-ledger
//!
//! The whole ledger lives in a single JSON document that is rewritten
//! atomically after every change:
//!
//! ```json
//! {
//!   "transactions": [ { "id": ..., "date": ..., "amount": ..., ... } ],
//!   "budgets": [ { "category": ..., "monthly_limit": ..., "current_spent": ... } ]
//! }
//! ```

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{Budget, Transaction};

/// Serializable snapshot of the entire ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerFile {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

/// Reads and rewrites the ledger's backing file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store bound to `path` (the file need not exist yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; `Ok(None)` when there is no file yet
    pub fn load(&self) -> Result<Option<LedgerFile>, LedgerError> {
        read_json(&self.path)
    }

    /// Replace the backing file with `snapshot`
    pub fn save(&self, snapshot: &LedgerFile) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, snapshot)
    }
}
