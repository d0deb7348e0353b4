//! Interactive menu shell
//!
//! Reads menu selections and fields line by line, validates them, and
//! drives the ledger and category set. Rejected input aborts only the
//! command being entered; the loop always continues until `0` is chosen or
//! the input is exhausted.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;

use super::menu::MenuCommand;
use crate::config::Settings;
use crate::display::{
    format_added, format_balance, format_category_added, format_category_list, format_history,
    format_menu,
};
use crate::error::{InputError, PocketbookError, PocketbookResult};
use crate::models::{Amount, CategoryAddOutcome, CategorySet, TransactionKind};
use crate::services::{Ledger, UndoOutcome};

/// Clock used to timestamp new transactions
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// The interactive shell, generic over its input and output streams
pub struct Shell<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
    categories: CategorySet,
    settings: Settings,
    clock: Clock,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with an empty ledger and the default categories
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            ledger: Ledger::new(),
            categories: CategorySet::new(),
            settings,
            clock: local_now,
        }
    }

    /// Replace the clock used for transaction timestamps
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Consume the shell, returning its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until exit or end of input
    pub fn run(&mut self) -> PocketbookResult<()> {
        tracing::info!("interactive session started");

        loop {
            self.print(&format_balance(self.ledger.current_balance()))?;
            self.print(&format_menu())?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, leaving menu");
                break;
            };

            let command = MenuCommand::parse(&line);
            if command == MenuCommand::Exit {
                break;
            }

            self.dispatch(command)?;
            let separator = format!("{}\n\n", self.settings.separator);
            self.print(&separator)?;
            self.output.flush()?;
        }

        self.output.flush()?;
        tracing::info!(
            transactions = self.ledger.len(),
            balance = self.ledger.current_balance(),
            "interactive session ended"
        );
        Ok(())
    }

    /// Execute a single menu command
    pub fn dispatch(&mut self, command: MenuCommand) -> PocketbookResult<()> {
        let result = match command {
            MenuCommand::AddExpense => self.add_transaction(TransactionKind::Expense),
            MenuCommand::AddIncome => self.add_transaction(TransactionKind::Income),
            MenuCommand::Undo => self.undo_last(),
            MenuCommand::History => self.show_history(),
            MenuCommand::AddCategory => self.add_category(),
            MenuCommand::Exit => Ok(()),
            MenuCommand::Unknown => self.print("Unknown command\n"),
        };

        match result {
            Err(PocketbookError::Input(err)) => {
                tracing::debug!(?command, %err, "input rejected");
                self.print(&format!("{}\n", err))
            }
            other => other,
        }
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> PocketbookResult<()> {
        self.print("Enter amount:\n")?;
        let amount: Amount = self
            .read_line()?
            .and_then(|line| line.parse().ok())
            .ok_or(InputError::InvalidAmount)?;

        let listing = format_category_list(&self.categories);
        self.print(&listing)?;
        self.print("Select a category (type the category name):\n")?;
        let category = self
            .read_line()?
            .filter(|name| self.categories.contains(name))
            .ok_or(InputError::InvalidCategory)?;

        let timestamp = (self.clock)();
        self.ledger
            .add_transaction(amount, kind, category.as_str(), timestamp);
        self.print(&format_added(kind, amount, &category))
    }

    fn undo_last(&mut self) -> PocketbookResult<()> {
        match self.ledger.undo_last() {
            UndoOutcome::Removed(_) => self.print("Last transaction removed.\n"),
            UndoOutcome::NothingToUndo => self.print("No transactions to undo.\n"),
        }
    }

    fn show_history(&mut self) -> PocketbookResult<()> {
        self.print("Filter by category (leave blank for all):\n")?;
        let filter = self.read_line()?.filter(|f| !f.trim().is_empty());

        let listing = format_history(
            &self.ledger.history(filter.as_deref()),
            &self.settings.date_format,
        );
        self.print(&listing)
    }

    fn add_category(&mut self) -> PocketbookResult<()> {
        self.print("Enter new category name:\n")?;
        let name = self
            .read_line()?
            .filter(|name| !name.trim().is_empty())
            .ok_or(InputError::InvalidCategoryName)?;

        let outcome = self.categories.add(&name);
        if outcome == CategoryAddOutcome::Blank {
            return Err(InputError::InvalidCategoryName.into());
        }
        self.print(&format_category_added(&name, outcome))
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> PocketbookResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn print(&mut self, text: &str) -> PocketbookResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}
