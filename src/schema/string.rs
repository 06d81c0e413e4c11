//! String schema validation.
//!
//! This module provides [`StringSchema`] for validating string fields with
//! length, pattern and email constraints.

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{SchemaIssue, SchemaIssues};
use crate::path::FieldPath;
use crate::patterns;

use super::traits::SchemaLike;

/// A constraint applied to string values.
#[derive(Clone)]
enum StringConstraint {
    MinLength {
        min: usize,
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        message: Option<String>,
    },
    Pattern {
        regex: Regex,
        message: Option<String>,
    },
    Email {
        message: Option<String>,
    },
}

/// A schema for validating string fields.
///
/// `StringSchema` validates that a value is a string and applies any
/// configured constraints. Every violated constraint is reported rather
/// than only the first, so an object schema can still surface the first
/// message per field deterministically.
///
/// Default messages are label-free Japanese strings; the field path already
/// names the field for the reader. Use [`StringSchema::error`] to override
/// the message of the most recently added constraint.
///
/// # Example
///
/// ```rust
/// use kensho::{FieldPath, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::string().min_len(1).max_len(50);
///
/// let result = schema.validate(&json!("田中太郎"), &FieldPath::root());
/// assert!(result.is_success());
///
/// let result = schema.validate(&json!(""), &FieldPath::root());
/// assert!(result.is_failure());
/// ```
#[derive(Clone)]
pub struct StringSchema {
    constraints: Vec<StringConstraint>,
    type_error_message: Option<String>,
}

impl StringSchema {
    /// Creates a new string schema with no constraints.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            type_error_message: None,
        }
    }

    /// Adds a minimum length constraint.
    ///
    /// Lengths count Unicode scalar values, not bytes.
    pub fn min_len(mut self, min: usize) -> Self {
        self.constraints
            .push(StringConstraint::MinLength { min, message: None });
        self
    }

    /// Adds a maximum length constraint.
    pub fn max_len(mut self, max: usize) -> Self {
        self.constraints
            .push(StringConstraint::MaxLength { max, message: None });
        self
    }

    /// Adds a regex pattern constraint.
    ///
    /// Returns an error if the pattern does not compile. For the shared
    /// patterns see [`crate::patterns`], which pairs well with
    /// [`StringSchema::matches`].
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        self.constraints.push(StringConstraint::Pattern {
            regex,
            message: None,
        });
        Ok(self)
    }

    /// Adds a pattern constraint from an already-compiled regex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kensho::{patterns, Schema};
    ///
    /// let schema = Schema::string().matches(&patterns::PHONE);
    /// ```
    pub fn matches(mut self, regex: &Regex) -> Self {
        self.constraints.push(StringConstraint::Pattern {
            regex: regex.clone(),
            message: None,
        });
        self
    }

    /// Adds an email-shape constraint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kensho::{FieldPath, Schema, SchemaLike};
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().email();
    ///
    /// let result = schema.validate(&json!("tanaka@example.com"), &FieldPath::root());
    /// assert!(result.is_success());
    ///
    /// let result = schema.validate(&json!("invalid-email"), &FieldPath::root());
    /// assert!(result.is_failure());
    /// ```
    pub fn email(mut self) -> Self {
        self.constraints
            .push(StringConstraint::Email { message: None });
        self
    }

    /// Sets a custom error message for the most recent constraint.
    ///
    /// If no constraints have been added yet, this sets the type error
    /// message used when the value is not a string.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            match last {
                StringConstraint::MinLength { message: m, .. } => *m = Some(message.into()),
                StringConstraint::MaxLength { message: m, .. } => *m = Some(message.into()),
                StringConstraint::Pattern { message: m, .. } => *m = Some(message.into()),
                StringConstraint::Email { message: m } => *m = Some(message.into()),
            }
        } else {
            self.type_error_message = Some(message.into());
        }
        self
    }
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for StringSchema {
    fn validate(&self, value: &Value, path: &FieldPath) -> Validation<Value, SchemaIssues> {
        let s = match value.as_str() {
            Some(s) => s,
            None => {
                let message = self
                    .type_error_message
                    .clone()
                    .unwrap_or_else(|| "文字列で入力してください".to_string());
                return Validation::Failure(SchemaIssues::single(SchemaIssue::new(
                    path.clone(),
                    message,
                )));
            }
        };

        let issues: Vec<SchemaIssue> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, s, path))
            .collect();

        if issues.is_empty() {
            Validation::Success(Value::String(s.to_string()))
        } else {
            Validation::Failure(SchemaIssues::from_vec(issues))
        }
    }
}

/// Checks a single constraint and returns an issue if it fails.
fn check_constraint(
    constraint: &StringConstraint,
    value: &str,
    path: &FieldPath,
) -> Option<SchemaIssue> {
    match constraint {
        StringConstraint::MinLength { min, message } => {
            if value.chars().count() < *min {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("{min}文字以上で入力してください"));
                Some(SchemaIssue::new(path.clone(), msg))
            } else {
                None
            }
        }
        StringConstraint::MaxLength { max, message } => {
            if value.chars().count() > *max {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("{max}文字以内で入力してください"));
                Some(SchemaIssue::new(path.clone(), msg))
            } else {
                None
            }
        }
        StringConstraint::Pattern { regex, message } => {
            if !regex.is_match(value) {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| "形式が正しくありません".to_string());
                Some(SchemaIssue::new(path.clone(), msg))
            } else {
                None
            }
        }
        StringConstraint::Email { message } => {
            if !patterns::EMAIL.is_match(value) {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| "正しいメールアドレスの形式で入力してください".to_string());
                Some(SchemaIssue::new(path.clone(), msg))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unwrap_failure<T: std::fmt::Debug>(v: Validation<T, SchemaIssues>) -> SchemaIssues {
        v.into_result().unwrap_err()
    }

    #[test]
    fn test_accepts_string() {
        let schema = StringSchema::new();
        let result = schema.validate(&json!("こんにちは"), &FieldPath::root());
        assert!(result.is_success());
        assert_eq!(result.into_result().unwrap(), json!("こんにちは"));
    }

    #[test]
    fn test_rejects_non_string() {
        let schema = StringSchema::new();
        for value in [json!(42), json!(null), json!(true), json!({"a": 1})] {
            let result = schema.validate(&value, &FieldPath::root());
            assert!(result.is_failure());
        }
    }

    #[test]
    fn test_type_error_default_message() {
        let schema = StringSchema::new();
        let issues = unwrap_failure(schema.validate(&json!(1), &FieldPath::root()));
        assert_eq!(issues.first().message, "文字列で入力してください");
    }

    #[test]
    fn test_min_len_counts_characters() {
        let schema = StringSchema::new().min_len(3);

        assert!(schema.validate(&json!("日本語"), &FieldPath::root()).is_success());

        let issues = unwrap_failure(schema.validate(&json!("🎉🎊"), &FieldPath::root()));
        assert_eq!(issues.first().message, "3文字以上で入力してください");
    }

    #[test]
    fn test_max_len() {
        let schema = StringSchema::new().max_len(5);

        assert!(schema.validate(&json!("12345"), &FieldPath::root()).is_success());

        let issues = unwrap_failure(schema.validate(&json!("123456"), &FieldPath::root()));
        assert_eq!(issues.first().message, "5文字以内で入力してください");
    }

    #[test]
    fn test_pattern_constraint() {
        let schema = StringSchema::new().pattern(r"^\d+$").unwrap();

        assert!(schema.validate(&json!("12345"), &FieldPath::root()).is_success());
        assert!(schema.validate(&json!("abc"), &FieldPath::root()).is_failure());
    }

    #[test]
    fn test_invalid_pattern_is_a_build_error() {
        assert!(StringSchema::new().pattern(r"[invalid").is_err());
    }

    #[test]
    fn test_matches_shared_pattern() {
        let schema = StringSchema::new().matches(&patterns::ALPHANUMERIC);

        assert!(schema.validate(&json!("abc123"), &FieldPath::root()).is_success());
        assert!(schema.validate(&json!("abc-123"), &FieldPath::root()).is_failure());
    }

    #[test]
    fn test_email_constraint() {
        let schema = StringSchema::new().email();

        assert!(schema
            .validate(&json!("tanaka@example.com"), &FieldPath::root())
            .is_success());

        let issues = unwrap_failure(schema.validate(&json!("invalid-email"), &FieldPath::root()));
        assert_eq!(issues.first().message, "正しいメールアドレスの形式で入力してください");
    }

    #[test]
    fn test_custom_error_message() {
        let schema = StringSchema::new().min_len(8).error("パスワードは8文字以上で設定してください");

        let issues = unwrap_failure(schema.validate(&json!("short"), &FieldPath::root()));
        assert_eq!(issues.first().message, "パスワードは8文字以上で設定してください");
    }

    #[test]
    fn test_all_violations_reported_in_declaration_order() {
        let schema = StringSchema::new().min_len(10).pattern(r"^\d+$").unwrap();

        let issues = unwrap_failure(schema.validate(&json!("abc"), &FieldPath::root()));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues.first().message, "10文字以上で入力してください");
    }

    #[test]
    fn test_issue_paths_follow_field() {
        let schema = StringSchema::new().min_len(1);
        let path = FieldPath::root().push_field("contact").push_field("email");

        let issues = unwrap_failure(schema.validate(&json!(""), &path));
        assert_eq!(issues.first().path.to_string(), "contact.email");
    }
}
