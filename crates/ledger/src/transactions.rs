//! Transaction records and their input form.
//!
//! A [`Transaction`] is a single recorded money event. Records are immutable
//! once stored: the ledger either holds them or removes them, it never edits
//! them in place.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::amount::Amount;
use crate::error::{LedgerError, LedgerResult};

/// Direction of a transaction. Serialized as `INCOME` / `EXPENSE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single recorded income or expense event.
///
/// `date` is an opaque label chosen at entry time (the default entry path
/// uses `YYYY-MM-DD`); the ledger orders by insertion, not by parsing dates.
/// `category` groups expenses by exact string equality. The sign of the
/// movement lives in `kind`, so `amount` is always a plain magnitude.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: String,
    pub category: String,
    pub amount: Amount,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Input for [`Ledger::add`]: a transaction before the store assigns its id.
///
/// Built through [`NewTransaction::new`], which holds the boundary
/// validation, so every value that reaches the store is already well formed.
///
/// [`Ledger::add`]: crate::Ledger::add
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTransaction {
    pub(crate) date: String,
    pub(crate) category: String,
    pub(crate) amount: Amount,
    pub(crate) description: String,
    pub(crate) kind: TransactionKind,
}

impl NewTransaction {
    /// Validates the pieces of a new transaction.
    ///
    /// The category must not be empty; it is kept verbatim otherwise, since
    /// grouping is by exact string. The description may be empty and the
    /// date is accepted as given.
    pub fn new(
        kind: TransactionKind,
        date: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        let category = category.into();
        if category.is_empty() {
            return Err(LedgerError::InvalidCategory(
                "category must not be empty".to_string(),
            ));
        }

        Ok(Self {
            date: date.into(),
            category,
            amount,
            description: description.into(),
            kind,
        })
    }

    /// Same as [`new`], with the date set to the current UTC calendar day in
    /// `YYYY-MM-DD` form.
    ///
    /// [`new`]: NewTransaction::new
    pub fn for_today(
        kind: TransactionKind,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        Self::new(
            kind,
            Utc::now().date_naive().to_string(),
            amount,
            category,
            description,
        )
    }
}
