//! Core data models for teller
//!
//! Accounts and the money amounts they hold.

pub mod account;
pub mod money;

pub use account::{is_valid_pin, Account, DEFAULT_PIN};
pub use money::{Money, MoneyParseError};
