//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod config;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use config::{handle_config_command, ConfigArgs};
pub use transaction::{handle_deposit, handle_login, handle_withdraw};

use crate::error::{TellerError, TellerResult};

/// Use the PIN given on the command line, or prompt for it (hidden input)
pub fn read_pin(pin: Option<String>) -> TellerResult<String> {
    match pin {
        Some(pin) => Ok(pin),
        None => rpassword::prompt_password("PIN: ")
            .map(|pin| pin.trim().to_string())
            .map_err(|e| TellerError::Io(format!("Failed to read PIN: {}", e))),
    }
}
