//! CLI command handlers
//!
//! The interactive menu shell plus the small non-interactive commands,
//! bridging clap argument parsing with the ledger.

pub mod config;
pub mod menu;
pub mod shell;

pub use config::handle_config_command;
pub use menu::MenuCommand;
pub use shell::Shell;
