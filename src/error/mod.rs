//! Error types for validation failures.
//!
//! This module provides [`SchemaIssue`] / [`SchemaIssues`] for the raw
//! per-field issues a schema reports, and [`ValidationFailure`] for the
//! normalized failure shape the engine hands to callers.

mod failure;
mod issue;

pub use failure::{ValidationFailure, ValidationResultExt};
pub use issue::{SchemaIssue, SchemaIssues};
