//! Raw schema issues.
//!
//! This module provides [`SchemaIssue`] for a single reported problem and
//! [`SchemaIssues`] for the non-empty collection a failing schema returns.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::FieldPath;

/// A single issue reported by a schema.
///
/// An issue is the minimal unit of schema feedback: where the problem is
/// ([`FieldPath`]) and what the user should be told about it. Issues are
/// reported in the order the schema encounters them; that order is what
/// the first-message-per-field policy in
/// [`validate_data`](crate::validate_data) keys off.
///
/// # Example
///
/// ```rust
/// use kensho::{FieldPath, SchemaIssue};
///
/// let issue = SchemaIssue::new(
///     FieldPath::from_field("email"),
///     "正しいメールアドレスの形式で入力してください",
/// );
///
/// assert_eq!(issue.path.to_string(), "email");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaIssue {
    /// The path to the field the issue was reported against.
    pub path: FieldPath,
    /// Human-readable message for that field.
    pub message: String,
}

impl SchemaIssue {
    /// Creates a new issue at the given path.
    pub fn new(path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for SchemaIssue {}

/// A non-empty collection of schema issues.
///
/// `SchemaIssues` wraps a `NonEmptyVec<SchemaIssue>` so that a failing
/// validation is guaranteed to carry at least one issue. This is what makes
/// `Validation<Value, SchemaIssues>` honest: a failure cannot be empty.
///
/// # Combining Issues
///
/// `SchemaIssues` implements `Semigroup`, which lets an object schema fold
/// the failures of its fields together while preserving report order:
///
/// ```rust
/// use kensho::{FieldPath, SchemaIssue, SchemaIssues};
/// use stillwater::prelude::*;
///
/// let a = SchemaIssues::single(SchemaIssue::new(
///     FieldPath::from_field("name"),
///     "必須です",
/// ));
/// let b = SchemaIssues::single(SchemaIssue::new(
///     FieldPath::from_field("email"),
///     "形式が正しくありません",
/// ));
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaIssues(NonEmptyVec<SchemaIssue>);

impl SchemaIssues {
    /// Creates a `SchemaIssues` containing a single issue.
    pub fn single(issue: SchemaIssue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates a `SchemaIssues` from a `Vec<SchemaIssue>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty. Use this only when at least one
    /// issue has been collected.
    pub fn from_vec(issues: Vec<SchemaIssue>) -> Self {
        Self(NonEmptyVec::from_vec(issues).expect("SchemaIssues requires at least one issue"))
    }

    /// Returns the number of issues in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained issues, in report order.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.0.iter()
    }

    /// Returns the first issue in the collection.
    pub fn first(&self) -> &SchemaIssue {
        self.0.head()
    }

    /// Returns all issues reported at the specified path.
    pub fn at_path(&self, path: &FieldPath) -> Vec<&SchemaIssue> {
        self.0.iter().filter(|i| &i.path == path).collect()
    }

    /// Converts this collection into a `Vec<SchemaIssue>`.
    pub fn into_vec(self) -> Vec<SchemaIssue> {
        self.0.into_vec()
    }
}

impl Semigroup for SchemaIssues {
    fn combine(self, other: Self) -> Self {
        SchemaIssues(self.0.combine(other.0))
    }
}

impl Display for SchemaIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} issue(s):", self.len())?;
        for (i, issue) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaIssues {}

impl IntoIterator for SchemaIssues {
    type Item = SchemaIssue;
    type IntoIter = std::vec::IntoIter<SchemaIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

// SchemaIssue and SchemaIssues are Send + Sync since all fields are owned
// types. These assertions keep that true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaIssue>();
    assert_sync::<SchemaIssue>();
    assert_send::<SchemaIssues>();
    assert_sync::<SchemaIssues>();
};
