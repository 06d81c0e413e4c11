//! Numeric schema validation.
//!
//! This module provides [`NumberSchema`] for validating numeric fields
//! (ages, doses, room numbers) with range constraints.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{SchemaIssue, SchemaIssues};
use crate::path::FieldPath;

use super::traits::SchemaLike;

/// A constraint applied to numeric values.
#[derive(Clone)]
enum NumberConstraint {
    Min { value: f64, message: Option<String> },
    Max { value: f64, message: Option<String> },
    Integer { message: Option<String> },
}

/// A schema for validating numeric fields.
///
/// `NumberSchema` validates that a value is a JSON number and applies any
/// configured range constraints. All violations are reported, not just the
/// first. Values are compared as `f64`; use [`NumberSchema::integer`] when
/// a whole number is required.
///
/// # Example
///
/// ```rust
/// use kensho::{FieldPath, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::number().min(0.0).max(150.0);
///
/// let result = schema.validate(&json!(30), &FieldPath::root());
/// assert!(result.is_success());
///
/// let result = schema.validate(&json!(-5), &FieldPath::root());
/// assert!(result.is_failure());
/// ```
#[derive(Clone)]
pub struct NumberSchema {
    constraints: Vec<NumberConstraint>,
    type_error_message: Option<String>,
}

impl NumberSchema {
    /// Creates a new number schema with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            type_error_message: None,
        }
    }

    /// Adds a minimum value constraint (inclusive).
    pub fn min(mut self, value: f64) -> Self {
        self.constraints.push(NumberConstraint::Min {
            value,
            message: None,
        });
        self
    }

    /// Adds a maximum value constraint (inclusive).
    pub fn max(mut self, value: f64) -> Self {
        self.constraints.push(NumberConstraint::Max {
            value,
            message: None,
        });
        self
    }

    /// Requires the value to be a whole number.
    pub fn integer(mut self) -> Self {
        self.constraints
            .push(NumberConstraint::Integer { message: None });
        self
    }

    /// Sets a custom error message for the most recent constraint.
    ///
    /// If no constraints have been added yet, this sets the type error
    /// message used when the value is not a number.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            match last {
                NumberConstraint::Min { message: m, .. } => *m = Some(message.into()),
                NumberConstraint::Max { message: m, .. } => *m = Some(message.into()),
                NumberConstraint::Integer { message: m } => *m = Some(message.into()),
            }
        } else {
            self.type_error_message = Some(message.into());
        }
        self
    }
}

impl Default for NumberSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for NumberSchema {
    fn validate(&self, value: &Value, path: &FieldPath) -> Validation<Value, SchemaIssues> {
        let n = match value.as_f64() {
            Some(n) => n,
            None => {
                let message = self
                    .type_error_message
                    .clone()
                    .unwrap_or_else(|| "数値で入力してください".to_string());
                return Validation::Failure(SchemaIssues::single(SchemaIssue::new(
                    path.clone(),
                    message,
                )));
            }
        };

        let issues: Vec<SchemaIssue> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, n, path))
            .collect();

        if issues.is_empty() {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(SchemaIssues::from_vec(issues))
        }
    }
}

/// Checks a single constraint and returns an issue if it fails.
fn check_constraint(constraint: &NumberConstraint, n: f64, path: &FieldPath) -> Option<SchemaIssue> {
    match constraint {
        NumberConstraint::Min { value, message } => {
            if n < *value {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("{value}以上の値を入力してください"));
                Some(SchemaIssue::new(path.clone(), msg))
            } else {
                None
            }
        }
        NumberConstraint::Max { value, message } => {
            if n > *value {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("{value}以下の値を入力してください"));
                Some(SchemaIssue::new(path.clone(), msg))
            } else {
                None
            }
        }
        NumberConstraint::Integer { message } => {
            if n.fract() != 0.0 {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| "整数で入力してください".to_string());
                Some(SchemaIssue::new(path.clone(), msg))
            } else {
                None
            }
        }
    }
}
