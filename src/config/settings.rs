//! User settings for teller
//!
//! Manages user preferences: display currency, the ledger file location and
//! the PIN given to accounts created without one.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TellerPaths;
use crate::error::TellerError;
use crate::models::DEFAULT_PIN;

/// User settings for teller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing balances
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file override; relative paths resolve against the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// PIN used by `account create` when none is given
    #[serde(default = "default_pin")]
    pub default_pin: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_pin() -> String {
    DEFAULT_PIN.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            ledger_file: None,
            default_pin: default_pin(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TellerPaths) -> Result<Self, TellerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TellerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TellerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not written until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TellerPaths) -> Result<(), TellerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TellerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TellerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Where the ledger lives for these settings
    pub fn ledger_path(&self, paths: &TellerPaths) -> PathBuf {
        match &self.ledger_file {
            Some(path) => paths.resolve(path),
            None => paths.ledger_file(),
        }
    }
}
