//! Errors the ledger can produce.
//!
//! Validation errors come from the input boundary and are returned to the
//! caller. [`Io`] and [`Json`] come from the persistence layer; the store
//! recovers from them on its own, so they never surface through `add` or
//! `delete`.
//!
//! [`Io`]: LedgerError::Io
//! [`Json`]: LedgerError::Json
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b))
            | (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
