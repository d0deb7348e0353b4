//! Transaction display formatting
//!
//! History lines and confirmations for recorded transactions.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::models::{Amount, Transaction, TransactionKind};

/// ISO-8601 calendar date
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a timestamp, or `None` if the format needs data a naive
/// timestamp lacks (such as `%z`)
pub fn try_format_date(timestamp: NaiveDateTime, date_format: &str) -> Option<String> {
    let mut output = String::new();
    write!(output, "{}", timestamp.format(date_format)).ok()?;
    Some(output)
}

/// Format a single history line
///
/// Falls back to the ISO date when `date_format` cannot be rendered.
pub fn format_history_line(txn: &Transaction, date_format: &str) -> String {
    let date = try_format_date(txn.timestamp(), date_format)
        .unwrap_or_else(|| txn.timestamp().format(DEFAULT_DATE_FORMAT).to_string());

    format!(
        "Amount: {}, Type: {}, Category: {}, Date: {}",
        txn.amount(),
        txn.kind(),
        txn.category(),
        date
    )
}

/// Format a transaction history listing
pub fn format_history(transactions: &[&Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_history_line(txn, date_format));
        output.push('\n');
    }
    output
}

/// Confirmation printed after a transaction is recorded
pub fn format_added(kind: TransactionKind, amount: Amount, category: &str) -> String {
    format!("{} of {} added to category {}.\n", kind, amount, category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(value: u32, kind: TransactionKind, category: &str) -> Transaction {
        let timestamp = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(18, 45, 10)
            .unwrap();
        Transaction::new(Amount::new(value).unwrap(), kind, category, timestamp)
    }

    #[test]
    fn test_history_line() {
        let txn = sample(30, TransactionKind::Expense, "Transport");
        assert_eq!(
            format_history_line(&txn, DEFAULT_DATE_FORMAT),
            "Amount: 30, Type: Expense, Category: Transport, Date: 2025-01-15"
        );
    }

    #[test]
    fn test_history_line_custom_date_format() {
        let txn = sample(5, TransactionKind::Income, "Other");
        assert_eq!(
            format_history_line(&txn, "%d/%m/%Y"),
            "Amount: 5, Type: Income, Category: Other, Date: 15/01/2025"
        );
    }

    #[test]
    fn test_history_line_offset_format_falls_back() {
        let txn = sample(5, TransactionKind::Income, "Other");
        assert_eq!(
            format_history_line(&txn, "%Y-%m-%d %z"),
            "Amount: 5, Type: Income, Category: Other, Date: 2025-01-15"
        );
    }

    #[test]
    fn test_try_format_date() {
        let when = sample(1, TransactionKind::Income, "Food").timestamp();
        assert_eq!(try_format_date(when, "%H:%M").as_deref(), Some("18:45"));
        assert_eq!(try_format_date(when, "%Z"), None);
        assert_eq!(try_format_date(when, "%:z"), None);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            format_history(&[], DEFAULT_DATE_FORMAT),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_history_lines_in_order() {
        let first = sample(100, TransactionKind::Income, "Food");
        let second = sample(30, TransactionKind::Expense, "Transport");
        let output = format_history(&[&first, &second], DEFAULT_DATE_FORMAT);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Amount: 100, Type: Income"));
        assert!(lines[1].starts_with("Amount: 30, Type: Expense"));
    }

    #[test]
    fn test_added_confirmation() {
        let amount = Amount::new(42).unwrap();
        assert_eq!(
            format_added(TransactionKind::Income, amount, "Food"),
            "Income of 42 added to category Food.\n"
        );
    }
}
