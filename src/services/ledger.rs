//! Ledger service
//!
//! Holds the ordered list of transactions and derives the balance from it.
//! The only mutations are appending a transaction and removing the most
//! recent one, so the balance is recomputed on every read.
//!
//! Category membership is not checked here. Callers must confirm the
//! category against their [`CategorySet`](crate::models::CategorySet)
//! before calling [`Ledger::add_transaction`].

use chrono::NaiveDateTime;

use crate::models::{Amount, Transaction, TransactionKind};

/// Result of an undo request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The most recent transaction was removed
    Removed(Transaction),
    /// The ledger was already empty
    NothingToUndo,
}

/// In-memory transaction ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction
    pub fn add_transaction(
        &mut self,
        amount: Amount,
        kind: TransactionKind,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> &Transaction {
        let txn = Transaction::new(amount, kind, category, timestamp);
        tracing::debug!(
            id = %txn.id(),
            kind = %txn.kind(),
            amount = txn.amount().value(),
            category = txn.category(),
            "transaction added"
        );

        self.transactions.push(txn);
        &self.transactions[self.transactions.len() - 1]
    }

    /// Remove the most recently added transaction
    pub fn undo_last(&mut self) -> UndoOutcome {
        match self.transactions.pop() {
            Some(txn) => {
                tracing::debug!(
                    id = %txn.id(),
                    kind = %txn.kind(),
                    amount = txn.amount().value(),
                    category = txn.category(),
                    "transaction removed"
                );
                UndoOutcome::Removed(txn)
            }
            None => {
                tracing::debug!("undo requested on empty ledger");
                UndoOutcome::NothingToUndo
            }
        }
    }

    /// Transactions in insertion order, optionally limited to one category
    pub fn history(&self, category: Option<&str>) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| category.map_or(true, |c| t.category() == c))
            .collect()
    }

    /// Income minus expenses over all current transactions
    pub fn current_balance(&self) -> i64 {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
