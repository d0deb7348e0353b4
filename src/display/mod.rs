//! Display formatting for terminal output
//!
//! Pure formatting helpers for the interactive shell. Nothing here performs
//! I/O; the shell decides where the text goes.

pub mod category;
pub mod menu;
pub mod transaction;

pub use category::{format_category_added, format_category_list};
pub use menu::{format_balance, format_menu};
pub use transaction::{
    format_added, format_history, format_history_line, try_format_date, DEFAULT_DATE_FORMAT,
};
