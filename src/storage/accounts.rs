//! Account manager backed by a CSV ledger file
//!
//! Owns every account in the ledger and keeps the file in step with memory:
//! each mutation it drives is followed by a full rewrite of the file.

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, StringRecord};
use tracing::{debug, error, info, warn};

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, Money};

use super::file_io::{ensure_csv_file, open_csv, write_csv_atomic};

/// Column names of the ledger file
pub const LEDGER_HEADER: [&str; 3] = ["name", "balance", "pin"];

/// Owns the ledger's accounts and their persisted copy
///
/// Name uniqueness is not enforced here; callers check with
/// [`AccountManager::get_account`] before creating. Duplicate names are kept
/// in insertion order and lookups return the first.
#[derive(Debug)]
pub struct AccountManager {
    file_path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountManager {
    /// Open the ledger at `file_path`, creating an empty one if absent
    pub fn open(file_path: impl Into<PathBuf>) -> TellerResult<Self> {
        let file_path = file_path.into();

        if ensure_csv_file(&file_path, &LEDGER_HEADER)? {
            info!(path = %file_path.display(), "created empty ledger");
        }

        let mut manager = Self {
            file_path,
            accounts: Vec::new(),
        };
        manager.load_accounts();
        Ok(manager)
    }

    /// Path of the ledger file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Create an account, append it and persist the ledger
    ///
    /// A negative `balance` is floored to zero. If the ledger cannot be
    /// written the account is not kept.
    pub fn create_account(
        &mut self,
        name: &str,
        balance: Money,
        pin: &str,
    ) -> TellerResult<&Account> {
        self.accounts.push(Account::new(name, balance, pin));

        if let Err(e) = self.save_accounts() {
            self.accounts.pop();
            return Err(e);
        }

        info!(account = name, "created account");
        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    /// Get the first account whose name matches (case-insensitive)
    pub fn get_account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.matches_name(name))
    }

    /// Mutable lookup; changes made through it need [`Self::save_accounts`]
    pub fn get_account_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.matches_name(name))
    }

    /// All accounts in insertion order
    pub fn get_all_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Deposit into the named account and persist
    pub fn deposit(&mut self, name: &str, amount: Money) -> TellerResult<&Account> {
        self.update_and_save(name, |account| account.deposit(amount))
    }

    /// Withdraw from the named account and persist
    pub fn withdraw(&mut self, name: &str, amount: Money) -> TellerResult<&Account> {
        self.update_and_save(name, |account| account.withdraw(amount))
    }

    /// Rename the named account and persist
    pub fn rename_account(&mut self, name: &str, new_name: &str) -> TellerResult<&Account> {
        self.update_and_save(name, |account| {
            account.set_name(new_name);
            Ok(())
        })
    }

    /// Replace the named account's PIN and persist
    pub fn change_pin(&mut self, name: &str, new_pin: &str) -> TellerResult<&Account> {
        self.update_and_save(name, |account| {
            account.set_pin(new_pin);
            Ok(())
        })
    }

    /// Rewrite the ledger file with every account
    pub fn save_accounts(&self) -> TellerResult<()> {
        let records = self.accounts.iter().map(|account| {
            [
                account.name().to_string(),
                account.balance().to_decimal_string(),
                account.pin().to_string(),
            ]
        });

        write_csv_atomic(&self.file_path, &LEDGER_HEADER, records)?;

        debug!(
            path = %self.file_path.display(),
            count = self.accounts.len(),
            "saved ledger"
        );
        Ok(())
    }

    /// Replace the in-memory accounts with the contents of the ledger file
    ///
    /// Never fails: a missing file yields no accounts and malformed rows are
    /// skipped with a warning. A read error is logged and leaves the ledger
    /// empty, even if some rows were already read.
    pub fn load_accounts(&mut self) {
        self.accounts.clear();

        let mut reader = match open_csv(&self.file_path) {
            Ok(Some(reader)) => reader,
            Ok(None) => {
                debug!(path = %self.file_path.display(), "no ledger file to load");
                return;
            }
            Err(e) => {
                error!(path = %self.file_path.display(), "failed to load accounts: {}", e);
                return;
            }
        };

        match read_accounts(&mut reader) {
            Ok(accounts) => self.accounts = accounts,
            Err(e) => {
                error!(path = %self.file_path.display(), "failed to load accounts: {}", e);
                return;
            }
        }

        debug!(
            path = %self.file_path.display(),
            count = self.accounts.len(),
            "loaded ledger"
        );
    }

    /// Apply `apply` to the named account, then persist
    ///
    /// The account is restored if `apply` fails or the write fails, so memory
    /// never drifts from the file.
    fn update_and_save<F>(&mut self, name: &str, apply: F) -> TellerResult<&Account>
    where
        F: FnOnce(&mut Account) -> TellerResult<()>,
    {
        let index = self
            .accounts
            .iter()
            .position(|a| a.matches_name(name))
            .ok_or_else(|| TellerError::account_not_found(name))?;

        let before = self.accounts[index].clone();
        apply(&mut self.accounts[index])?;

        if let Err(e) = self.save_accounts() {
            self.accounts[index] = before;
            return Err(e);
        }

        Ok(&self.accounts[index])
    }
}

/// Read every well-formed row, skipping the rest
///
/// Stops with an error on the first I/O failure.
fn read_accounts<R: Read>(reader: &mut Reader<R>) -> Result<Vec<Account>, csv::Error> {
    let mut accounts = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                warn!("skipping unreadable ledger row: {}", e);
                continue;
            }
        };

        match parse_record(&record) {
            Ok(account) => accounts.push(account),
            Err(reason) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, row = ?record, "skipping ledger row: {}", reason);
            }
        }
    }

    Ok(accounts)
}

/// Build an account from a `name,balance,pin` row
fn parse_record(record: &StringRecord) -> Result<Account, String> {
    if record.len() != LEDGER_HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            LEDGER_HEADER.len(),
            record.len()
        ));
    }

    let balance = Money::parse(&record[1]).map_err(|e| e.to_string())?;
    Ok(Account::new(&record[0], balance, &record[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv_reader;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    /// Yields `data`, then fails every later read
    struct FailingSource {
        data: io::Cursor<Vec<u8>>,
    }

    impl Read for FailingSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk went away")),
                n => Ok(n),
            }
        }
    }

    fn create_test_manager() -> (TempDir, AccountManager) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        let manager = AccountManager::open(path).unwrap();
        (temp_dir, manager)
    }

    #[test]
    fn test_open_creates_file_with_header() {
        let (temp_dir, manager) = create_test_manager();
        let contents = fs::read_to_string(temp_dir.path().join("accounts.csv")).unwrap();

        assert_eq!(contents, "name,balance,pin\n");
        assert!(manager.is_empty());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("accounts.csv");

        AccountManager::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_create_and_get() {
        let (_temp_dir, mut manager) = create_test_manager();

        let account = manager
            .create_account("Alice", Money::from_cents(10000), "1234")
            .unwrap();
        assert_eq!(account.name(), "Alice");

        let found = manager.get_account("alice").unwrap();
        assert_eq!(found.balance().cents(), 10000);
        assert!(manager.get_account("bob").is_none());
    }

    #[test]
    fn test_create_floors_negative_balance() {
        let (_temp_dir, mut manager) = create_test_manager();

        let account = manager
            .create_account("Overdrawn", Money::from_cents(-100), "0000")
            .unwrap();
        assert_eq!(account.balance(), Money::zero());
    }

    #[test]
    fn test_round_trip() {
        let (temp_dir, mut manager) = create_test_manager();
        manager
            .create_account("Alice", Money::from_cents(10000), "1234")
            .unwrap();

        let reopened = AccountManager::open(temp_dir.path().join("accounts.csv")).unwrap();
        let alice = reopened.get_account("alice").unwrap();

        assert_eq!(alice.balance().to_decimal_string(), "100.00");
        assert_eq!(alice.pin(), "1234");
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.create_account("Zed", Money::from_cents(1), "1111").unwrap();
        manager.create_account("Amy", Money::from_cents(250), "2222").unwrap();
        manager
            .create_account("Comma, Inc", Money::from_cents(99999), "0007")
            .unwrap();

        let before = manager.get_all_accounts().to_vec();
        manager.save_accounts().unwrap();
        manager.load_accounts();

        assert_eq!(manager.get_all_accounts(), before.as_slice());
    }

    #[test]
    fn test_duplicates_are_allowed_and_first_wins() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.create_account("Sam", Money::from_cents(100), "1111").unwrap();
        manager.create_account("SAM", Money::from_cents(200), "2222").unwrap();

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get_account("sam").unwrap().pin(), "1111");
    }

    #[test]
    fn test_deposit_persists() {
        let (temp_dir, mut manager) = create_test_manager();
        manager.create_account("Dee", Money::from_cents(5000), "1234").unwrap();

        let account = manager.deposit("dee", Money::from_cents(2500)).unwrap();
        assert_eq!(account.balance().cents(), 7500);

        let reopened = AccountManager::open(temp_dir.path().join("accounts.csv")).unwrap();
        assert_eq!(reopened.get_account("Dee").unwrap().balance().cents(), 7500);
    }

    #[test]
    fn test_withdraw_rejected_leaves_balance() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.create_account("Wes", Money::from_cents(1000), "1234").unwrap();

        let result = manager.withdraw("Wes", Money::from_cents(5000));
        assert!(matches!(result, Err(TellerError::InsufficientFunds { .. })));
        assert_eq!(manager.get_account("Wes").unwrap().balance().cents(), 1000);
    }

    #[test]
    fn test_transaction_on_unknown_account() {
        let (_temp_dir, mut manager) = create_test_manager();

        let err = manager.deposit("ghost", Money::from_cents(100)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rename_and_change_pin_persist() {
        let (temp_dir, mut manager) = create_test_manager();
        manager.create_account("Old", Money::zero(), "1234").unwrap();

        manager.rename_account("old", "New").unwrap();
        manager.change_pin("new", "9876").unwrap();

        let reopened = AccountManager::open(temp_dir.path().join("accounts.csv")).unwrap();
        assert!(reopened.get_account("old").is_none());
        assert!(reopened.get_account("new").unwrap().verify_pin("9876"));
    }

    #[test]
    fn test_load_skips_malformed_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(
            &path,
            "name,balance,pin\n\
             Alice,100.0,1234\n\
             Broken,lots,0000\n\
             Short,5\n\
             Long,5,1111,extra\n\
             Bob,20.5,4321\n",
        )
        .unwrap();

        let manager = AccountManager::open(&path).unwrap();
        let names: Vec<_> = manager.get_all_accounts().iter().map(|a| a.name()).collect();

        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(manager.get_account("bob").unwrap().balance().cents(), 2050);
    }

    #[test]
    fn test_read_error_discards_partial_rows() {
        let source = FailingSource {
            data: io::Cursor::new(b"name,balance,pin\nA,1.00,1111\n".to_vec()),
        };
        let mut reader = csv_reader(source);

        let err = read_accounts(&mut reader).unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_read_accounts_skips_bad_rows() {
        let mut reader = csv_reader(io::Cursor::new(
            b"name,balance,pin\nA,1.00,1111\nB,oops,2222\n".to_vec(),
        ));

        let accounts = read_accounts(&mut reader).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name(), "A");
    }

    #[test]
    fn test_load_read_error_leaves_ledger_empty() {
        let (temp_dir, mut manager) = create_test_manager();
        manager.create_account("Kept", Money::zero(), "0000").unwrap();

        // A directory opens but cannot be read as a file
        let path = temp_dir.path().join("accounts.csv");
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        manager.load_accounts();

        assert!(manager.is_empty());
    }

    #[test]
    fn test_load_floors_negative_balance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(&path, "name,balance,pin\nNeg,-40.00,1234\n").unwrap();

        let manager = AccountManager::open(&path).unwrap();
        assert_eq!(manager.get_account("neg").unwrap().balance(), Money::zero());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (temp_dir, mut manager) = create_test_manager();
        manager.create_account("Gone", Money::zero(), "0000").unwrap();

        fs::remove_file(temp_dir.path().join("accounts.csv")).unwrap();
        manager.load_accounts();

        assert!(manager.is_empty());
    }

    #[test]
    fn test_load_accepts_legacy_bootstrap_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(&path, "account_type,name,balance,deposit_count\n").unwrap();

        let manager = AccountManager::open(&path).unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_get_account_mut_requires_save() {
        let (temp_dir, mut manager) = create_test_manager();
        manager.create_account("Edit", Money::zero(), "0000").unwrap();

        manager
            .get_account_mut("edit")
            .unwrap()
            .set_balance(Money::from_cents(4200));
        manager.save_accounts().unwrap();

        let reopened = AccountManager::open(temp_dir.path().join("accounts.csv")).unwrap();
        assert_eq!(reopened.get_account("edit").unwrap().balance().cents(), 4200);
    }
}
