//! Derived statistics over a transaction collection.
//!
//! Every function here is a pure fold over the slice it is given: no
//! caching, no hidden state. Callers recompute from [`Ledger::list`]
//! whenever the collection changes.
//!
//! [`Ledger::list`]: crate::Ledger::list

use crate::transactions::{Transaction, TransactionKind};

/// Expense total for one category, in minor units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total_minor: i64,
}

/// Sum of all income amounts, in minor units.
#[must_use]
pub fn total_income(transactions: &[Transaction]) -> i64 {
    total_of(transactions, TransactionKind::Income)
}

/// Sum of all expense amounts, in minor units.
#[must_use]
pub fn total_expense(transactions: &[Transaction]) -> i64 {
    total_of(transactions, TransactionKind::Expense)
}

/// `total_income - total_expense`. Negative when expenses exceed income.
#[must_use]
pub fn balance(transactions: &[Transaction]) -> i64 {
    total_income(transactions) - total_expense(transactions)
}

/// Expense totals grouped by category, ordered by the first appearance of
/// each category among the expense transactions of the slice.
///
/// Grouping is by exact string equality: categories differing in case or
/// whitespace are distinct buckets. Income never contributes, so a category
/// seen only on income transactions does not appear at all.
#[must_use]
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
    {
        match totals.iter_mut().find(|entry| entry.category == tx.category) {
            Some(entry) => entry.total_minor += tx.amount.minor(),
            None => totals.push(CategoryTotal {
                category: tx.category.clone(),
                total_minor: tx.amount.minor(),
            }),
        }
    }
    totals
}

fn total_of(transactions: &[Transaction], kind: TransactionKind) -> i64 {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .map(|tx| tx.amount.minor())
        .sum()
}
