//! 1-based position parsing for record selection prompts.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected selection input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Response is not an integer.
    NotANumber(String),
    /// Integer does not address an element; `choice` is 1-based.
    OutOfRange { choice: i64, len: usize },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(_) => write!(f, "Invalid input."),
            Self::OutOfRange { .. } => write!(f, "Invalid selection."),
        }
    }
}

impl Error for SelectionError {}

/// Parses a 1-based position and returns the matching 0-based index.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let choice = trimmed
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    position_to_index(choice, len)
}

/// Checks a 0-based index against a collection length.
pub fn check_index(index: usize, len: usize) -> Result<usize, SelectionError> {
    if index < len {
        Ok(index)
    } else {
        Err(SelectionError::OutOfRange {
            choice: i64::try_from(index).map_or(i64::MAX, |value| value.saturating_add(1)),
            len,
        })
    }
}

fn position_to_index(choice: i64, len: usize) -> Result<usize, SelectionError> {
    match usize::try_from(choice) {
        Ok(position) if position >= 1 && position <= len => Ok(position - 1),
        _ => Err(SelectionError::OutOfRange { choice, len }),
    }
}
