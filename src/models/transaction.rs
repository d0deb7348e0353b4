//! Transaction model
//!
//! A transaction is an immutable income or expense record. Its amount is
//! always positive; the kind decides whether it adds to or subtracts from
//! the balance.

use chrono::NaiveDateTime;
use std::fmt;

use super::amount::Amount;
use super::ids::TransactionId;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money going out
    Expense,
    /// Money coming in
    Income,
}

impl TransactionKind {
    /// Signed contribution of `amount` to the balance
    pub fn signed(&self, amount: Amount) -> i64 {
        let value = i64::from(amount.value());
        match self {
            Self::Expense => -value,
            Self::Income => value,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    amount: Amount,
    kind: TransactionKind,
    category: String,
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        amount: Amount,
        kind: TransactionKind,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            kind,
            category: category.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Contribution of this transaction to the balance
    pub fn signed_amount(&self) -> i64 {
        self.kind.signed(self.amount)
    }
}
