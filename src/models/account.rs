//! Account model
//!
//! A named account holding a non-negative balance and a PIN.

use std::fmt;

use crate::error::{TellerError, TellerResult};

use super::money::Money;

/// PIN assigned when none is given
pub const DEFAULT_PIN: &str = "0000";

/// Number of digits in a well-formed PIN
pub const PIN_LENGTH: usize = 4;

/// A bank account
///
/// The balance can never be observed negative: transactions that would take it
/// below zero are refused, and direct overwrites are floored at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    name: String,
    balance: Money,
    pin: String,
}

impl Account {
    /// Create a new account; a negative starting balance is floored to zero
    pub fn new(name: impl Into<String>, balance: Money, pin: impl Into<String>) -> Self {
        let mut account = Self {
            name: name.into(),
            balance: Money::zero(),
            pin: pin.into(),
        };
        account.set_balance(balance);
        account
    }

    /// Add `amount` to the balance
    ///
    /// Fails without touching the balance if the result would not fit.
    pub fn deposit(&mut self, amount: Money) -> TellerResult<()> {
        if !amount.is_positive() {
            return Err(TellerError::NonPositiveAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| TellerError::Validation("Amount too large".into()))?;
        Ok(())
    }

    /// Take `amount` from the balance
    ///
    /// This is the only transaction path that lowers the balance, so it is
    /// where overdrafts are refused.
    pub fn withdraw(&mut self, amount: Money) -> TellerResult<()> {
        if !amount.is_positive() {
            return Err(TellerError::NonPositiveAmount(amount));
        }
        if amount > self.balance {
            return Err(TellerError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Overwrite the balance, flooring negative values to zero
    pub fn set_balance(&mut self, value: Money) {
        self.balance = value.non_negative();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Overwrite the PIN; format is not checked here (see [`is_valid_pin`])
    pub fn set_pin(&mut self, value: impl Into<String>) {
        self.pin = value.into();
    }

    /// Exact string comparison against the stored PIN
    pub fn verify_pin(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    /// Case-insensitive name match
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account name = {}, Account balance = {}",
            self.name,
            self.balance.to_decimal_string()
        )
    }
}

/// Check that a PIN is exactly four ASCII digits
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_with(cents: i64) -> Account {
        Account::new("Test", Money::from_cents(cents), "1234")
    }

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new("Checking", Money::zero(), DEFAULT_PIN);
        assert_eq!(account.name(), "Checking");
        assert_eq!(account.balance(), Money::zero());
        assert_eq!(account.pin(), DEFAULT_PIN);
    }

    #[test]
    fn test_negative_starting_balance_is_floored() {
        let account = account_with(-500);
        assert_eq!(account.balance(), Money::zero());
    }

    #[test]
    fn test_deposit() {
        let mut account = account_with(5000);
        account.deposit(Money::from_cents(2500)).unwrap();
        assert_eq!(account.balance().cents(), 7500);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = account_with(5000);
        assert_eq!(
            account.deposit(Money::zero()),
            Err(TellerError::NonPositiveAmount(Money::zero()))
        );
        assert!(account.deposit(Money::from_cents(-100)).is_err());
        assert_eq!(account.balance().cents(), 5000);
    }

    #[test]
    fn test_deposit_overflow_is_refused() {
        let big = Money::parse("92233720368547758").unwrap();
        let mut account = Account::new("Big", big, "1234");

        let err = account.deposit(big).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(account.balance(), big);
        assert!(!account.balance().is_negative());
    }

    #[test]
    fn test_withdraw() {
        let mut account = account_with(5000);
        account.withdraw(Money::from_cents(5000)).unwrap();
        assert_eq!(account.balance(), Money::zero());
    }

    #[test]
    fn test_withdraw_more_than_balance() {
        let mut account = account_with(1000);
        let result = account.withdraw(Money::from_cents(5000));
        assert_eq!(
            result,
            Err(TellerError::InsufficientFunds {
                needed: Money::from_cents(5000),
                available: Money::from_cents(1000),
            })
        );
        assert_eq!(account.balance().cents(), 1000);
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = account_with(1000);
        assert!(matches!(
            account.withdraw(Money::from_cents(-1)),
            Err(TellerError::NonPositiveAmount(_))
        ));
        assert!(account.withdraw(Money::zero()).is_err());
        assert_eq!(account.balance().cents(), 1000);
    }

    #[test]
    fn test_set_balance_clamps() {
        let mut account = account_with(1000);
        account.set_balance(Money::from_cents(-1));
        assert_eq!(account.balance(), Money::zero());
        account.set_balance(Money::from_cents(250));
        assert_eq!(account.balance().cents(), 250);
    }

    #[test]
    fn test_verify_pin() {
        let account = Account::new("Bob", Money::zero(), "4321");
        assert!(account.verify_pin("4321"));
        assert!(!account.verify_pin("0000"));
    }

    #[test]
    fn test_verify_pin_is_string_equality() {
        let account = Account::new("Bob", Money::zero(), "0123");
        assert!(!account.verify_pin("123"));
        assert!(!account.verify_pin("0123 "));
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut account = account_with(0);
        account.set_pin("not-a-pin");
        account.set_name("");
        assert_eq!(account.pin(), "not-a-pin");
        assert_eq!(account.name(), "");
    }

    #[test]
    fn test_matches_name() {
        let account = Account::new("Alice", Money::zero(), DEFAULT_PIN);
        assert!(account.matches_name("alice"));
        assert!(account.matches_name("ALICE"));
        assert!(!account.matches_name("alic"));
    }

    #[test]
    fn test_is_valid_pin() {
        assert!(is_valid_pin("0000"));
        assert!(is_valid_pin("4321"));
        assert!(!is_valid_pin("123"));
        assert!(!is_valid_pin("12345"));
        assert!(!is_valid_pin("12a4"));
        assert!(!is_valid_pin(""));
    }

    #[test]
    fn test_display() {
        let account = Account::new("My Checking", Money::from_cents(10050), "1111");
        assert_eq!(
            format!("{}", account),
            "Account name = My Checking, Account balance = 100.50"
        );
    }
}
