//! Display formatting for terminal output

pub mod account;

pub use account::{format_account_details, format_account_list, format_welcome};
