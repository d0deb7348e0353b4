//! Menu command parsing

/// A command selected from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddExpense,
    AddIncome,
    Undo,
    History,
    AddCategory,
    Exit,
    Unknown,
}

impl MenuCommand {
    /// Parse a menu selection; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::AddExpense,
            "2" => Self::AddIncome,
            "3" => Self::Undo,
            "4" => Self::History,
            "5" => Self::AddCategory,
            "0" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}
