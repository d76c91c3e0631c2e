//! Command services over the in-memory documents.
//!
//! # Responsibility
//! - Turn structured editor input into document mutations.
//! - Own the single live document of a session next to its repository.
//! - Stay free of console I/O so every rule is unit-testable.
//!
//! # Invariants
//! - A rejected command never mutates the document.
//! - Indices given to services are 0-based; console positions are 1-based.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod member_service;
pub mod news_service;
pub mod selection;

use selection::SelectionError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error for rejected editor commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Position does not address a record of the collection.
    Selection(SelectionError),
    /// A news item cannot be filed while no category exists.
    NoCategories,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selection(err) => write!(f, "{err}"),
            Self::NoCategories => write!(f, "No categories found. Add a category first."),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Selection(err) => Some(err),
            Self::NoCategories => None,
        }
    }
}

impl From<SelectionError> for ServiceError {
    fn from(value: SelectionError) -> Self {
        Self::Selection(value)
    }
}

/// Maps a blank response to `None`.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Overwrites `target` only when `response` is non-blank.
pub(crate) fn replace_if_given(target: &mut String, response: &str) {
    if let Some(value) = non_blank(response) {
        *target = value;
    }
}

/// Overwrites an optional field only when `response` is non-blank.
pub(crate) fn replace_optional_if_given(target: &mut Option<String>, response: &str) {
    if let Some(value) = non_blank(response) {
        *target = Some(value);
    }
}

/// Parses an explicit yes/no response.
///
/// Returns `None` for anything that is neither (including blank).
pub fn parse_yes_no(response: &str) -> Option<bool> {
    match response.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// First `max_chars` characters of `text`, on char boundaries.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::{excerpt, parse_yes_no, replace_if_given, replace_optional_if_given};

    #[test]
    fn yes_no_accepts_only_explicit_answers() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" true "), Some(true));
        assert_eq!(parse_yes_no("no"), Some(false));
        assert_eq!(parse_yes_no(""), None);
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn blank_responses_leave_fields_untouched() {
        let mut name = "Ada".to_string();
        replace_if_given(&mut name, "   ");
        assert_eq!(name, "Ada");
        replace_if_given(&mut name, " Grace ");
        assert_eq!(name, "Grace");

        let mut website = None;
        replace_optional_if_given(&mut website, "");
        assert_eq!(website, None);
        replace_optional_if_given(&mut website, "https://example.org");
        assert_eq!(website.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("héllo wörld", 7), "héllo w");
        assert_eq!(excerpt("short", 100), "short");
    }
}
