//! Custom error types for Pocketbook
//!
//! Ledger and category operations never fail; their "failure-like" cases are
//! reported as outcome enums. The errors here cover the surrounding
//! application: configuration, file I/O and interactive input validation.

use thiserror::Error;

/// The main error type for Pocketbook operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Rejected interactive input; aborts only the current command
    #[error(transparent)]
    Input(#[from] InputError),
}

impl PocketbookError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;

/// Rejected interactive input
///
/// The display text is the exact message shown to the user; a rejected input
/// aborts only the command being entered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid amount.")]
    InvalidAmount,

    #[error("Invalid category.")]
    InvalidCategory,

    #[error("Invalid category name.")]
    InvalidCategoryName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PocketbookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = PocketbookError::Validation("bad".into());
        assert!(err.is_validation());
        assert!(!PocketbookError::Io("x".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PocketbookError = io_err.into();
        assert!(matches!(err, PocketbookError::Io(_)));
    }

    #[test]
    fn test_input_error_is_transparent() {
        let err: PocketbookError = InputError::InvalidAmount.into();
        assert!(matches!(err, PocketbookError::Input(InputError::InvalidAmount)));
        assert_eq!(err.to_string(), "Invalid amount.");
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::InvalidAmount.to_string(), "Invalid amount.");
        assert_eq!(InputError::InvalidCategory.to_string(), "Invalid category.");
        assert_eq!(
            InputError::InvalidCategoryName.to_string(),
            "Invalid category name."
        );
    }
}
