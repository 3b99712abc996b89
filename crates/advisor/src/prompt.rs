//! Prompt assembly for the advisory request.
//!
//! The model receives a fixed instruction followed by one summary line per
//! transaction.

use ledger::{Transaction, TransactionKind};

/// Fixed instruction sent ahead of the transaction data.
const PREAMBLE: &str = "The following is one month of personal ledger entries. \
Analyze the data and suggest, in at most three lines, advice on spending \
habits and a budget plan for the next month.";

/// Builds the full prompt: the instruction, a blank line, then one line per
/// transaction in the order given.
#[must_use]
pub fn build_prompt(transactions: &[Transaction]) -> String {
    let summary = transactions
        .iter()
        .map(summary_line)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{PREAMBLE}\n\n{summary}")
}

/// One transaction as `date: ±amount (category - description)`. Income is
/// `+`, expense is `-`.
fn summary_line(tx: &Transaction) -> String {
    let sign = match tx.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!(
        "{}: {}{} ({} - {})",
        tx.date, sign, tx.amount, tx.category, tx.description
    )
}

#[cfg(test)]
mod tests {
    use ledger::Amount;
    use uuid::Uuid;

    use super::*;

    fn tx(kind: TransactionKind, minor: i64, category: &str, description: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            date: "2026-01-10".to_string(),
            category: category.to_string(),
            amount: Amount::new(minor).unwrap(),
            description: description.to_string(),
            kind,
        }
    }

    #[test]
    fn prompt_starts_with_the_instruction() {
        let prompt = build_prompt(&[]);
        assert!(prompt.starts_with("The following is one month"));
        assert!(prompt.contains("at most three lines"));
    }

    #[test]
    fn income_and_expense_lines_carry_their_sign() {
        let transactions = vec![
            tx(TransactionKind::Income, 500_000_00, "Salary", "January pay"),
            tx(TransactionKind::Expense, 30_000_00, "Food", "groceries"),
        ];
        let prompt = build_prompt(&transactions);
        assert!(prompt.contains("2026-01-10: +500000.00 (Salary - January pay)"));
        assert!(prompt.contains("2026-01-10: -30000.00 (Food - groceries)"));
    }

    #[test]
    fn one_line_per_transaction_in_given_order() {
        let transactions = vec![
            tx(TransactionKind::Expense, 1_00, "Coffee", ""),
            tx(TransactionKind::Expense, 2_00, "Books", ""),
        ];
        let prompt = build_prompt(&transactions);
        let coffee = prompt.find("Coffee").unwrap();
        let books = prompt.find("Books").unwrap();
        assert!(coffee < books);
        assert_eq!(prompt.lines().count(), 4);
    }
}
