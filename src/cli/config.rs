//! Config CLI command
//!
//! Shows the resolved paths and settings, and updates settings when any
//! option is given.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::{Settings, TellerPaths};
use crate::error::{TellerError, TellerResult};
use crate::models::is_valid_pin;

/// Options for `teller config`; with none set the command only reports
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Currency symbol used when printing balances
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// PIN given to accounts created without one (4 digits)
    #[arg(long)]
    pub default_pin: Option<String>,

    /// Ledger file; relative paths resolve against the base directory
    #[arg(long)]
    pub ledger_file: Option<PathBuf>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.currency_symbol.is_none() && self.default_pin.is_none() && self.ledger_file.is_none()
    }
}

/// Apply any requested changes, save them, then print the configuration
pub fn handle_config_command(
    paths: &TellerPaths,
    mut settings: Settings,
    args: ConfigArgs,
) -> TellerResult<()> {
    if !args.is_empty() {
        apply_config_args(&mut settings, args)?;
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "saved settings");
        println!("Settings saved.");
        println!();
    }

    println!("teller Configuration");
    println!("====================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Ledger file:    {}", settings.ledger_path(paths).display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Default PIN:     {}", settings.default_pin);

    Ok(())
}

/// Validate every option before touching `settings`
fn apply_config_args(settings: &mut Settings, args: ConfigArgs) -> TellerResult<()> {
    if let Some(pin) = &args.default_pin {
        if !is_valid_pin(pin) {
            return Err(TellerError::Validation("PIN must be 4 digits".into()));
        }
    }
    if let Some(path) = &args.ledger_file {
        if path.as_os_str().is_empty() {
            return Err(TellerError::Validation("Ledger file cannot be empty".into()));
        }
    }

    if let Some(symbol) = args.currency_symbol {
        settings.currency_symbol = symbol;
    }
    if let Some(pin) = args.default_pin {
        settings.default_pin = pin;
    }
    if let Some(path) = args.ledger_file {
        settings.ledger_file = Some(path);
    }
    Ok(())
}
