//! Durable storage for the transaction collection.
//!
//! The whole ledger lives in one JSON file under a fixed path: an ordered
//! array of transaction records, no schema version, rewritten in full on
//! every mutation. Anything the file holds that does not decode as that
//! array is corruption; the store recovers by starting empty.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LedgerResult;
use crate::transactions::Transaction;

const DEFAULT_LEDGER_PATH: &str = "data/transactions.json";

/// Persistence adapter bound to one backing file.
#[derive(Clone, Debug)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the previously saved collection.
    ///
    /// `Ok(None)` means no file exists yet, which is a fresh start rather
    /// than an error. Content that cannot be decoded is an `Err`; the caller
    /// decides how to recover.
    pub fn read(&self) -> LedgerResult<Option<Vec<Transaction>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Overwrites the backing file with the full collection, creating parent
    /// directories on first save.
    pub fn save(&self, transactions: &[Transaction]) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(transactions)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl Default for LedgerFile {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_PATH)
    }
}
