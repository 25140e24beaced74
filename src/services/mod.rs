//! Service layer for teller
//!
//! The service layer applies input validation and PIN checks on top of the
//! storage layer before any account is touched.

pub mod account;

pub use account::{verify_login, AccountService};
