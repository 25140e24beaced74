//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{TellerError, TellerResult};
use crate::models::Money;
use crate::services::AccountService;
use crate::storage::AccountManager;

use super::read_pin;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Starting balance (e.g., "100.00" or "100")
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// Four-digit PIN (defaults to the configured default PIN)
        #[arg(short, long)]
        pin: Option<String>,
    },
    /// List all accounts
    List,
    /// Show account details (requires PIN)
    Show {
        /// Account name
        account: String,
        /// Account PIN (prompted if omitted)
        #[arg(short, long)]
        pin: Option<String>,
    },
    /// Rename an account (requires PIN)
    Rename {
        /// Account name
        account: String,
        /// New name
        new_name: String,
        /// Account PIN (prompted if omitted)
        #[arg(short, long)]
        pin: Option<String>,
    },
    /// Change an account's PIN
    SetPin {
        /// Account name
        account: String,
        /// Current PIN (prompted if omitted)
        #[arg(short, long)]
        pin: Option<String>,
        /// New four-digit PIN
        #[arg(long)]
        new_pin: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    manager: &mut AccountManager,
    settings: &Settings,
    cmd: AccountCommands,
) -> TellerResult<()> {
    let mut service = AccountService::new(manager);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create { name, balance, pin } => {
            let opening_balance = Money::parse(&balance).map_err(|e| {
                TellerError::Validation(format!(
                    "Invalid balance format: '{}'. Use format like '100.00' or '100'. Error: {}",
                    balance, e
                ))
            })?;
            let pin = pin.unwrap_or_else(|| settings.default_pin.clone());

            let account = service.create(&name, opening_balance, &pin)?;

            println!("Account '{}' created successfully.", account.name());
            println!(
                "  Starting Balance: {}",
                account.balance().format_with_symbol(symbol)
            );
        }

        AccountCommands::List => {
            print!("{}", format_account_list(service.list(), symbol));
        }

        AccountCommands::Show { account, pin } => {
            let pin = read_pin(pin)?;
            let found = service.login(&account, &pin)?;
            print!("{}", format_account_details(found, symbol));
        }

        AccountCommands::Rename {
            account,
            new_name,
            pin,
        } => {
            let pin = read_pin(pin)?;
            let renamed = service.rename(&account, &pin, &new_name)?;
            println!("Renamed account: {}", renamed.name());
        }

        AccountCommands::SetPin {
            account,
            pin,
            new_pin,
        } => {
            let pin = read_pin(pin)?;
            let updated = service.change_pin(&account, &pin, &new_pin)?;
            println!("PIN updated for account: {}", updated.name());
        }
    }

    Ok(())
}
