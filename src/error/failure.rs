//! Normalized validation failures.
//!
//! This module provides [`ValidationFailure`], the failure half of the
//! engine's universal result shape, and [`ValidationResultExt`] for reading
//! results without matching on `Validation` variants.

use indexmap::IndexMap;
use stillwater::Validation;

use crate::error::SchemaIssues;

/// The failure half of a [`ValidationResult`](crate::ValidationResult).
///
/// A failure is either a single message (field-rule violations, async
/// failures, a schema engine that panicked) or a per-field error map with a
/// fixed summary (schema violations). Because this is an enum, a result can
/// never carry both data and errors, and a single failure can never carry
/// both a field-scoped map and an unrelated standalone message.
///
/// # Example
///
/// ```rust
/// use kensho::ValidationFailure;
///
/// let failure = ValidationFailure::message("利用者名は必須です");
/// assert_eq!(failure.error(), "利用者名は必須です");
/// assert!(failure.field_errors().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationFailure {
    /// A single human-readable message, not scoped to any field.
    #[error("{0}")]
    Message(String),
    /// One or more fields failed schema validation.
    ///
    /// `errors` maps each failing field's rendered path to its first
    /// reported message; `summary` is the fixed, rule-independent headline.
    #[error("{summary}")]
    Fields {
        /// Rule-independent summary of the failure.
        summary: String,
        /// First reported message per failing field, in report order.
        errors: IndexMap<String, String>,
    },
}

impl ValidationFailure {
    /// Creates a failure carrying a single message.
    pub fn message(message: impl Into<String>) -> Self {
        ValidationFailure::Message(message.into())
    }

    /// Builds a field-scoped failure from raw schema issues.
    ///
    /// Issues are walked in report order and only the first message per
    /// rendered field path is kept; a field with several simultaneous
    /// violations surfaces exactly one message. Map order follows the order
    /// fields first appeared in the report.
    pub fn from_issues(summary: impl Into<String>, issues: &SchemaIssues) -> Self {
        let mut errors = IndexMap::new();
        for issue in issues.iter() {
            errors
                .entry(issue.path.to_string())
                .or_insert_with(|| issue.message.clone());
        }
        ValidationFailure::Fields {
            summary: summary.into(),
            errors,
        }
    }

    /// Returns the headline message: the message itself, or the summary for
    /// a field-scoped failure.
    pub fn error(&self) -> &str {
        match self {
            ValidationFailure::Message(message) => message,
            ValidationFailure::Fields { summary, .. } => summary,
        }
    }

    /// Returns the per-field error map, if this failure is field-scoped.
    pub fn field_errors(&self) -> Option<&IndexMap<String, String>> {
        match self {
            ValidationFailure::Message(_) => None,
            ValidationFailure::Fields { errors, .. } => Some(errors),
        }
    }
}

/// Convenience accessors for [`ValidationResult`](crate::ValidationResult).
///
/// UI code mostly wants "the message for this field, or nothing" so it can
/// feed [`FormState::update`](crate::FormState::update) directly. This trait
/// provides that reading without forcing callers to match `Validation`
/// variants.
pub trait ValidationResultExt<T> {
    /// Returns the headline error message, or `None` when valid.
    fn error_message(&self) -> Option<&str>;

    /// Returns the per-field error map, or `None` when valid or when the
    /// failure is not field-scoped.
    fn field_errors(&self) -> Option<&IndexMap<String, String>>;

    /// Consumes the result, returning the owned headline message on failure.
    ///
    /// This is the shape [`FormState::update`](crate::FormState::update)
    /// accepts: `Some(message)` marks the field invalid, `None` clears it.
    fn into_error(self) -> Option<String>;
}

impl<T> ValidationResultExt<T> for Validation<T, ValidationFailure> {
    fn error_message(&self) -> Option<&str> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(failure) => Some(failure.error()),
        }
    }

    fn field_errors(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(failure) => failure.field_errors(),
        }
    }

    fn into_error(self) -> Option<String> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(failure) => Some(failure.error().to_string()),
        }
    }
}
