//! Path management for teller
//!
//! Provides XDG-compliant path resolution for the settings file and ledger.
//!
//! ## Path Resolution Order
//!
//! 1. `TELLER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/teller` or `~/.config/teller`
//! 3. Windows: `%APPDATA%\teller`

use std::path::{Path, PathBuf};

use crate::error::TellerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "TELLER_DATA_DIR";

/// Default ledger file name inside the base directory
pub const LEDGER_FILE_NAME: &str = "accounts.csv";

/// Manages all paths used by teller
#[derive(Debug, Clone)]
pub struct TellerPaths {
    base_dir: PathBuf,
}

impl TellerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, TellerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TellerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join(LEDGER_FILE_NAME)
    }

    /// Resolve a ledger override; relative paths are taken from the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TellerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TellerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TellerError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var_os("HOME")
                .ok_or_else(|| TellerError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("teller"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TellerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TellerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("teller"))
}
