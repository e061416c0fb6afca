//! User settings for pocket-ledger
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a partial or missing file is fine.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings for pocket-ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many transactions the dashboard and `list` show by default
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Address the JSON API binds to
    #[serde(default = "default_server_addr")]
    pub server_addr: SocketAddr,

    /// Data file location; defaults to `finance_data.json` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_recent_limit() -> usize {
    10
}

fn default_server_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            recent_limit: default_recent_limit(),
            server_addr: default_server_addr(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// The data file to use: the configured one, else the default location
    ///
    /// A relative configured path is taken relative to the base directory.
    pub fn data_file(&self, paths: &LedgerPaths) -> PathBuf {
        match &self.data_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => paths.base_dir().join(file),
            None => paths.data_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_limit, 10);
        assert_eq!(settings.server_addr.port(), 5000);
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path());

        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            recent_limit: 25,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        assert_eq!(Settings::load_or_create(&paths).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"schema_version": 1, "recent_limit": 3}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.recent_limit, 3);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), "recent_limit = 3").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_data_file_resolution() {
        let paths = LedgerPaths::with_base_dir("/home/me/.config/pocket-ledger");
        let mut settings = Settings::default();
        assert_eq!(settings.data_file(&paths), paths.data_file());

        settings.data_file = Some(PathBuf::from("books.json"));
        assert_eq!(
            settings.data_file(&paths),
            PathBuf::from("/home/me/.config/pocket-ledger/books.json")
        );

        settings.data_file = Some(PathBuf::from("/srv/ledger.json"));
        assert_eq!(settings.data_file(&paths), PathBuf::from("/srv/ledger.json"));
    }
}
