//! Pocketbook - terminal-based personal income and expense ledger
//!
//! Records income and expense entries against user-defined categories,
//! undoes the latest entry, lists history and tracks a running balance.
//! All ledger state lives in memory for the duration of one session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, transactions, categories)
//! - `services`: The ledger
//! - `display`: Text formatting for terminal output
//! - `cli`: The interactive menu shell and other commands
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pocketbook::models::{Amount, CategorySet, TransactionKind};
//! use pocketbook::services::Ledger;
//!
//! let categories = CategorySet::new();
//! let mut ledger = Ledger::new();
//! let when = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! assert!(categories.contains("Food"));
//! ledger.add_transaction(Amount::new(100).unwrap(), TransactionKind::Income, "Food", when);
//! ledger.add_transaction(Amount::new(30).unwrap(), TransactionKind::Expense, "Food", when);
//! assert_eq!(ledger.current_balance(), 70);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{PocketbookError, PocketbookResult};
