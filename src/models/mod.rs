//! Core data models for Pocketbook
//!
//! Transactions, their amounts and kinds, and the set of categories they
//! can be filed under.

pub mod amount;
pub mod category;
pub mod ids;
pub mod transaction;

pub use amount::{Amount, AmountParseError};
pub use category::{CategoryAddOutcome, CategorySet, DEFAULT_CATEGORIES};
pub use ids::TransactionId;
pub use transaction::{Transaction, TransactionKind};
