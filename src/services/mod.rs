//! Service layer for Pocketbook
//!
//! Business logic on top of the data models: recording transactions,
//! undoing them, and deriving history and balance.

pub mod ledger;

pub use ledger::{Ledger, UndoOutcome};
