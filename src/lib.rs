//! teller - PIN-gated account ledger backed by a CSV file
//!
//! This library provides the core of a single-user ledger: named accounts with
//! non-negative balances and PINs, kept in a flat `name,balance,pin` file that
//! is rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, money)
//! - `storage`: CSV ledger file and the account manager
//! - `services`: Validation and PIN gating
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `teller` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use teller::models::Money;
//! use teller::storage::AccountManager;
//!
//! let mut manager = AccountManager::open("accounts.csv")?;
//! manager.create_account("Alice", Money::from_cents(10000), "1234")?;
//! manager.deposit("alice", Money::from_cents(2500))?;
//! # Ok::<(), teller::TellerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TellerError, TellerResult};
pub use models::{Account, Money};
pub use storage::AccountManager;
