//! Category set
//!
//! The user-visible list of category names a transaction may be filed
//! under. Names are unique by exact, case-sensitive match and keep their
//! insertion order. The set only grows.

/// Categories every new set starts with
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Other"];

/// Result of adding a category name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryAddOutcome {
    /// The name was appended
    Added,
    /// The name was already present; the set is unchanged
    AlreadyExists,
    /// The name was empty or whitespace only; the set is unchanged
    Blank,
}

/// Insertion-ordered set of category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Create a set seeded with the default categories
    pub fn new() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add a category name
    pub fn add(&mut self, name: &str) -> CategoryAddOutcome {
        if name.trim().is_empty() {
            return CategoryAddOutcome::Blank;
        }
        if self.contains(name) {
            return CategoryAddOutcome::AlreadyExists;
        }

        self.names.push(name.to_string());
        tracing::debug!(category = name, "category added");
        CategoryAddOutcome::Added
    }

    /// Check whether `name` is a known category (exact match)
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// All names in insertion order
    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new()
    }
}
