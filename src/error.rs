//! Custom error types for teller
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Expected conditions (bad amounts, wrong PINs, unknown accounts) each get a
//! dedicated variant so callers can react without parsing messages.

use thiserror::Error;

use crate::models::Money;

/// The main error type for teller operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TellerError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// No account with the given name
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// An account with the given name already exists
    #[error("Account already exists: {0}")]
    DuplicateName(String),

    /// PIN did not match the stored PIN
    #[error("Incorrect PIN for account '{0}'")]
    InvalidPin(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Ledger file errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TellerError {
    /// Create a "not found" error for an account name
    pub fn account_not_found(name: impl Into<String>) -> Self {
        Self::AccountNotFound(name.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TellerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TellerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TellerError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for teller operations
pub type TellerResult<T> = Result<T, TellerError>;
