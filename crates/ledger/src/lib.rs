use uuid::Uuid;

pub use amount::Amount;
pub use categories::CategoryBudget;
pub use error::{LedgerError, LedgerResult};
pub use storage::LedgerFile;
pub use transactions::{NewTransaction, Transaction, TransactionKind};

mod amount;
mod categories;
mod error;
pub mod statistics;
mod storage;
mod transactions;

/// The transaction store. Owns the canonical ordered collection and keeps
/// the backing file in sync across mutations.
///
/// In-memory state is authoritative for the running process; persistence is
/// best-effort write-through. A failed write is logged and the mutation
/// stands.
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    storage: LedgerFile,
}

impl Ledger {
    /// Return a builder for `Ledger`.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Records a new transaction and returns its assigned id.
    ///
    /// The record is prepended, so [`list`] stays most-recent-first by
    /// insertion. The full collection is persisted before returning.
    ///
    /// [`list`]: Ledger::list
    pub fn add(&mut self, entry: NewTransaction) -> Uuid {
        let tx = Transaction {
            id: Uuid::new_v4(),
            date: entry.date,
            category: entry.category,
            amount: entry.amount,
            description: entry.description,
            kind: entry.kind,
        };
        let id = tx.id;
        self.transactions.insert(0, tx);
        self.persist();
        id
    }

    /// Removes the transaction with the given id, if present.
    ///
    /// Deleting an id the ledger does not hold is a no-op, not an error, so
    /// repeated deletes converge.
    pub fn delete(&mut self, id: Uuid) {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        if self.transactions.len() != before {
            self.persist();
        }
    }

    /// Read-only view of the collection, most-recent-first.
    #[must_use]
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.transactions) {
            tracing::warn!("failed to persist ledger to {:?}: {err}", self.storage.path());
        }
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    storage: LedgerFile,
}

impl LedgerBuilder {
    /// Pass the backing file to load from and persist to.
    pub fn storage(mut self, storage: LedgerFile) -> LedgerBuilder {
        self.storage = storage;
        self
    }

    /// Construct `Ledger`, loading the previously persisted collection.
    ///
    /// An absent backing file starts an empty ledger. Content that does not
    /// decode also starts empty: corruption is logged and never fatal.
    pub fn build(self) -> Ledger {
        let transactions = match self.storage.read() {
            Ok(Some(transactions)) => transactions,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(
                    "failed to load ledger from {:?}, starting empty: {err}",
                    self.storage.path()
                );
                Vec::new()
            }
        };
        Ledger {
            transactions,
            storage: self.storage,
        }
    }
}
