//! Boolean schema validation.
//!
//! This module provides [`BooleanSchema`] for checkbox-style fields
//! (consent flags, notification preferences).

use serde_json::Value;
use stillwater::Validation;

use crate::error::{SchemaIssue, SchemaIssues};
use crate::path::FieldPath;

use super::traits::SchemaLike;

/// A schema for validating boolean fields.
///
/// Validates that a value is a boolean. `must_be_true` covers the common
/// "consent required" case where only `true` is acceptable.
///
/// # Example
///
/// ```rust
/// use kensho::{FieldPath, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::boolean();
/// assert!(schema.validate(&json!(false), &FieldPath::root()).is_success());
/// assert!(schema.validate(&json!("yes"), &FieldPath::root()).is_failure());
/// ```
#[derive(Clone)]
pub struct BooleanSchema {
    must_be_true: Option<Option<String>>,
    type_error_message: Option<String>,
}

impl BooleanSchema {
    /// Creates a new boolean schema.
    pub fn new() -> Self {
        Self {
            must_be_true: None,
            type_error_message: None,
        }
    }

    /// Requires the value to be `true`.
    pub fn must_be_true(mut self) -> Self {
        self.must_be_true = Some(None);
        self
    }

    /// Sets a custom error message for the most recent constraint.
    ///
    /// If `must_be_true` has not been set, this sets the type error message
    /// used when the value is not a boolean.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        match &mut self.must_be_true {
            Some(m) => *m = Some(message.into()),
            None => self.type_error_message = Some(message.into()),
        }
        self
    }
}

impl Default for BooleanSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for BooleanSchema {
    fn validate(&self, value: &Value, path: &FieldPath) -> Validation<Value, SchemaIssues> {
        let b = match value.as_bool() {
            Some(b) => b,
            None => {
                let message = self
                    .type_error_message
                    .clone()
                    .unwrap_or_else(|| "真偽値で入力してください".to_string());
                return Validation::Failure(SchemaIssues::single(SchemaIssue::new(
                    path.clone(),
                    message,
                )));
            }
        };

        if let Some(message) = &self.must_be_true {
            if !b {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| "チェックが必要です".to_string());
                return Validation::Failure(SchemaIssues::single(SchemaIssue::new(
                    path.clone(),
                    msg,
                )));
            }
        }

        Validation::Success(Value::Bool(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_both_booleans() {
        let schema = BooleanSchema::new();
        assert!(schema.validate(&json!(true), &FieldPath::root()).is_success());
        assert!(schema.validate(&json!(false), &FieldPath::root()).is_success());
    }

    #[test]
    fn test_rejects_non_boolean() {
        let schema = BooleanSchema::new();
        assert!(schema.validate(&json!(1), &FieldPath::root()).is_failure());
        assert!(schema.validate(&json!("true"), &FieldPath::root()).is_failure());
    }

    #[test]
    fn test_must_be_true() {
        let schema = BooleanSchema::new().must_be_true().error("同意が必要です");

        assert!(schema.validate(&json!(true), &FieldPath::root()).is_success());

        let issues = schema
            .validate(&json!(false), &FieldPath::root())
            .into_result()
            .unwrap_err();
        assert_eq!(issues.first().message, "同意が必要です");
    }
}
