//! Typed record model for the site data documents.
//!
//! # Responsibility
//! - Define the record shapes stored in the news and group member files.
//! - Make optional-field omission a type-level concept (`Option<String>`).
//!
//! # Invariants
//! - Known fields serialize in declaration order, which is the on-disk order.
//! - Keys this model does not know about are carried through unchanged.

pub mod member;
pub mod news;

/// Shared behaviour of a whole backing document.
pub trait Document {
    /// Short stable name used in log events (`news`, `members`).
    const KIND: &'static str;

    /// Total number of records across every collection of the document.
    fn record_count(&self) -> usize;
}
