//! File I/O utilities with atomic writes
//!
//! Provides CSV file operations that won't corrupt the ledger on failure.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, WriterBuilder};

use crate::error::TellerError;

/// Create a CSV file containing only `header` if nothing exists at `path`
///
/// Returns `true` when a new file was written.
pub fn ensure_csv_file<P: AsRef<Path>>(path: P, header: &[&str]) -> Result<bool, TellerError> {
    let path = path.as_ref();

    if path.exists() {
        return Ok(false);
    }

    write_csv_atomic(path, header, std::iter::empty::<[&str; 0]>())?;
    Ok(true)
}

/// Open a CSV file for reading, returning `None` if it doesn't exist
///
/// The header row is consumed by the reader. Records may have any number of
/// fields so callers can report bad rows themselves.
pub fn open_csv<P: AsRef<Path>>(path: P) -> Result<Option<Reader<File>>, TellerError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TellerError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    Ok(Some(csv_reader(file)))
}

/// CSV reader over any source, configured the same way as [`open_csv`]
pub fn csv_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

/// Write a header and records to a CSV file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_csv_atomic<P, I, R, F>(path: P, header: &[&str], records: I) -> Result<(), TellerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TellerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must share the directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TellerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer
        .write_record(header)
        .map_err(|e| TellerError::Storage(format!("Failed to write header: {}", e)))?;

    for record in records {
        writer
            .write_record(record)
            .map_err(|e| TellerError::Storage(format!("Failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TellerError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| TellerError::Storage(format!("Failed to finish writing: {}", e)))?;

    file.sync_all()
        .map_err(|e| TellerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TellerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
