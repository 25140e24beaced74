//! Account service
//!
//! Input validation and PIN gating on top of the account manager. Every
//! transaction re-checks the PIN; there is no session.

use tracing::{info, warn};

use crate::error::{TellerError, TellerResult};
use crate::models::{is_valid_pin, Account, Money};
use crate::storage::AccountManager;

/// Service for account management
pub struct AccountService<'a> {
    manager: &'a mut AccountManager,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(manager: &'a mut AccountManager) -> Self {
        Self { manager }
    }

    /// Create a new account
    pub fn create(
        &mut self,
        name: &str,
        opening_balance: Money,
        pin: &str,
    ) -> TellerResult<Account> {
        let name = validate_name(name)?;
        validate_pin(pin)?;

        if opening_balance.is_negative() {
            return Err(TellerError::Validation(
                "Initial balance cannot be negative".into(),
            ));
        }

        if self.manager.get_account(name).is_some() {
            return Err(TellerError::DuplicateName(name.to_string()));
        }

        let account = self.manager.create_account(name, opening_balance, pin)?;
        Ok(account.clone())
    }

    /// Check a PIN against the named account
    pub fn login(&self, name: &str, pin: &str) -> TellerResult<&Account> {
        verify_login(&*self.manager, name, pin)
    }

    /// Deposit after checking the PIN
    pub fn deposit(&mut self, name: &str, pin: &str, amount: Money) -> TellerResult<Account> {
        let name = name.trim();
        self.login(name, pin)?;
        let account = self.manager.deposit(name, amount)?;
        info!(account = account.name(), %amount, "deposit");
        Ok(account.clone())
    }

    /// Withdraw after checking the PIN
    pub fn withdraw(&mut self, name: &str, pin: &str, amount: Money) -> TellerResult<Account> {
        let name = name.trim();
        self.login(name, pin)?;
        let account = self.manager.withdraw(name, amount)?;
        info!(account = account.name(), %amount, "withdrawal");
        Ok(account.clone())
    }

    /// Rename an account after checking the PIN
    pub fn rename(&mut self, name: &str, pin: &str, new_name: &str) -> TellerResult<Account> {
        let new_name = validate_name(new_name)?;
        let current = self.login(name, pin)?.name().to_string();

        // Changing only the case of the current name is allowed
        let taken = self
            .manager
            .get_all_accounts()
            .iter()
            .any(|a| a.matches_name(new_name) && !a.matches_name(&current));
        if taken {
            return Err(TellerError::DuplicateName(new_name.to_string()));
        }

        let account = self.manager.rename_account(&current, new_name)?;
        Ok(account.clone())
    }

    /// Replace an account's PIN after checking the current one
    pub fn change_pin(&mut self, name: &str, pin: &str, new_pin: &str) -> TellerResult<Account> {
        validate_pin(new_pin)?;
        let name = name.trim();
        self.login(name, pin)?;
        let account = self.manager.change_pin(name, new_pin)?;
        Ok(account.clone())
    }

    /// All accounts in creation order
    pub fn list(&self) -> &[Account] {
        self.manager.get_all_accounts()
    }

    /// Sum of every account's balance
    pub fn total_balance(&self) -> Money {
        self.manager.get_all_accounts().iter().map(|a| a.balance()).sum()
    }
}

/// Look up an account and check its PIN without needing write access
///
/// Surrounding whitespace in `name` is ignored; the PIN must match exactly.
pub fn verify_login<'m>(
    manager: &'m AccountManager,
    name: &str,
    pin: &str,
) -> TellerResult<&'m Account> {
    let name = name.trim();
    let account = manager
        .get_account(name)
        .ok_or_else(|| TellerError::account_not_found(name))?;

    if !account.verify_pin(pin) {
        warn!(account = name, "PIN verification failed");
        return Err(TellerError::InvalidPin(account.name().to_string()));
    }

    Ok(account)
}

fn validate_name(name: &str) -> TellerResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TellerError::Validation(
            "Account name cannot be empty".into(),
        ));
    }
    Ok(name)
}

fn validate_pin(pin: &str) -> TellerResult<()> {
    if !is_valid_pin(pin) {
        return Err(TellerError::Validation("PIN must be 4 digits".into()));
    }
    Ok(())
}
