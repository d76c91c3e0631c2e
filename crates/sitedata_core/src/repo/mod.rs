//! Document store abstractions and file-backed implementation.
//!
//! # Responsibility
//! - Load one whole document from its backing file and write it back.
//! - Keep the on-disk format (YAML) behind a small trait.
//!
//! # Invariants
//! - A missing backing file loads as the zero-value document.
//! - Save always rewrites the full document; there are no partial writes.

pub mod document_repo;
