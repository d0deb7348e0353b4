//! Amount type for transaction values
//!
//! Amounts are whole, unit-less currency units and always strictly positive.
//! The direction of a transaction lives in its kind, never in the sign.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest accepted amount (the range of a signed 32-bit integer)
pub const MAX_AMOUNT: u32 = i32::MAX as u32;

/// A strictly positive transaction amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u32);

impl Amount {
    /// Create an amount, returning `None` for zero or out-of-range values
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 || value > MAX_AMOUNT {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Get the raw value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error parsing an amount from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount is not a whole number: {0}")]
    NotANumber(String),

    #[error("amount must be greater than zero")]
    NotPositive,

    #[error("amount is too large (max {})", MAX_AMOUNT)]
    TooLarge,
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: i64 = s
            .parse()
            .map_err(|_| AmountParseError::NotANumber(s.to_string()))?;

        if value <= 0 {
            return Err(AmountParseError::NotPositive);
        }

        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(AmountParseError::TooLarge)
    }
}
