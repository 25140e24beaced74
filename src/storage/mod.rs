//! Storage layer for teller
//!
//! Provides the CSV-backed account manager with atomic writes and automatic
//! directory creation.

pub mod accounts;
pub mod file_io;

pub use accounts::{AccountManager, LEDGER_HEADER};
pub use file_io::{csv_reader, ensure_csv_file, open_csv, write_csv_atomic};
