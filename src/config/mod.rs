//! Configuration module for Pocketbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//!
//! Only settings live on disk. Ledger contents are kept in memory for the
//! lifetime of the process.

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::Settings;
