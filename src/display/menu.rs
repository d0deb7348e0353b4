//! Menu and balance formatting

/// Format the balance line shown before every menu
pub fn format_balance(balance: i64) -> String {
    format!("Balance: {}\n", balance)
}

/// Format the main menu
pub fn format_menu() -> String {
    let mut output = String::new();
    output.push_str("Menu:\n");
    output.push_str("1 - Add expense\n");
    output.push_str("2 - Add income\n");
    output.push_str("3 - Undo last transaction\n");
    output.push_str("4 - Show transaction history\n");
    output.push_str("5 - Add custom category\n");
    output.push_str("0 - Exit\n");
    output
}
