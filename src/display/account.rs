//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// Format a list of accounts with balances as a table
pub fn format_account_list(accounts: &[Account], currency_symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "Name",
        "Balance",
        name_width = name_width,
    ));

    let separator = format!("{:-<name_width$}  {:->14}\n", "", "", name_width = name_width);
    output.push_str(&separator);

    for account in accounts {
        output.push_str(&format!(
            "{:<name_width$}  {:>14}\n",
            account.name(),
            account.balance().format_with_symbol(currency_symbol),
            name_width = name_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance()).sum();

    output.push_str(&separator);
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "TOTAL",
        total.format_with_symbol(currency_symbol),
        name_width = name_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name()));
    output.push_str(&format!(
        "  Balance: {}\n",
        account.balance().format_with_symbol(currency_symbol)
    ));

    output
}

/// One-line welcome shown after a successful PIN check
pub fn format_welcome(account: &Account, currency_symbol: &str) -> String {
    format!(
        "Welcome {}\nYour account balance is {}",
        account.name(),
        account.balance().format_with_symbol(currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, cents: i64) -> Account {
        Account::new(name, Money::from_cents(cents), "1234")
    }

    #[test]
    fn test_format_account_list() {
        let accounts = vec![account("Checking", 100000), account("Savings", 500000)];

        let output = format_account_list(&accounts, "$");
        assert!(output.contains("Checking"));
        assert!(output.contains("Savings"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$6000.00"));
    }

    #[test]
    fn test_list_total_saturates() {
        let accounts = vec![account("A", i64::MAX - 1), account("B", 2)];

        let output = format_account_list(&accounts, "$");
        assert!(output.contains(&Money::MAX.format_with_symbol("$")));
        assert!(!output.contains("-$"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_account_list(&[], "$");
        assert!(output.contains("No accounts found"));
    }

    #[test]
    fn test_format_account_details() {
        let output = format_account_details(&account("My Account", 12345), "€");

        assert!(output.contains("My Account"));
        assert!(output.contains("€123.45"));
    }

    #[test]
    fn test_format_welcome() {
        let output = format_welcome(&account("Alice", 10000), "$");
        assert_eq!(output, "Welcome Alice\nYour account balance is $100.00");
    }
}
