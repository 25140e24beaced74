//! Transaction CLI commands
//!
//! Deposits, withdrawals and PIN login. Each command checks the PIN itself.

use crate::config::Settings;
use crate::display::format_welcome;
use crate::error::{TellerError, TellerResult};
use crate::models::Money;
use crate::services::{verify_login, AccountService};
use crate::storage::AccountManager;

use super::read_pin;

/// Deposit into an account
pub fn handle_deposit(
    manager: &mut AccountManager,
    settings: &Settings,
    account: &str,
    amount: &str,
    pin: Option<String>,
) -> TellerResult<()> {
    let amount = parse_amount(amount)?;
    let pin = read_pin(pin)?;

    let updated = AccountService::new(manager).deposit(account, &pin, amount)?;

    println!("Deposit successful");
    println!("{}", format_welcome(&updated, &settings.currency_symbol));
    Ok(())
}

/// Withdraw from an account
pub fn handle_withdraw(
    manager: &mut AccountManager,
    settings: &Settings,
    account: &str,
    amount: &str,
    pin: Option<String>,
) -> TellerResult<()> {
    let amount = parse_amount(amount)?;
    let pin = read_pin(pin)?;

    let updated = AccountService::new(manager).withdraw(account, &pin, amount)?;

    println!("Withdrawal successful");
    println!("{}", format_welcome(&updated, &settings.currency_symbol));
    Ok(())
}

/// Verify a PIN and greet the account holder
pub fn handle_login(
    manager: &AccountManager,
    settings: &Settings,
    account: &str,
    pin: Option<String>,
) -> TellerResult<()> {
    let pin = read_pin(pin)?;

    let found = verify_login(manager, account, &pin)?;

    println!("Logged in as {}", found.name());
    println!("{}", format_welcome(found, &settings.currency_symbol));
    Ok(())
}

/// Parse a transaction amount; sign checks are left to the account
fn parse_amount(amount: &str) -> TellerResult<Money> {
    Money::parse(amount).map_err(|_| {
        TellerError::Validation(format!("Please enter a valid number (got '{}')", amount))
    })
}
