//! Single-field validators.
//!
//! Stateless checks that test one rule against one raw input value and
//! return the engine's universal result shape. All four are total: no
//! panics, no side effects, always a result.

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::error::ValidationFailure;
use crate::message;
use crate::ValidationResult;

/// Validates that a value is present.
///
/// Fails for `null` and the empty string. `0` and `false` are present
/// values and pass; "empty" is not "falsy".
///
/// # Example
///
/// ```rust
/// use kensho::{validate_required, ValidationResultExt};
/// use serde_json::json;
///
/// assert!(validate_required(&json!("田中"), "氏名").is_success());
/// assert!(validate_required(&json!(0), "数値").is_success());
/// assert!(validate_required(&json!(false), "真偽値").is_success());
///
/// let result = validate_required(&json!(""), "氏名");
/// assert_eq!(result.error_message(), Some("氏名は必須です"));
/// ```
pub fn validate_required(value: &Value, label: &str) -> ValidationResult<()> {
    let missing = match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    };

    if missing {
        Validation::Failure(ValidationFailure::message(message::required(label)))
    } else {
        Validation::Success(())
    }
}

/// Validates that a string has at least `min` characters.
///
/// Lengths count Unicode scalar values, not bytes, so Japanese text is
/// measured the way users perceive it.
///
/// # Example
///
/// ```rust
/// use kensho::{validate_min_length, ValidationResultExt};
///
/// assert!(validate_min_length("田中太郎", 2, "氏名").is_success());
///
/// let result = validate_min_length("田", 2, "氏名");
/// assert_eq!(result.error_message(), Some("氏名は2文字以上で入力してください"));
/// ```
pub fn validate_min_length(value: &str, min: usize, label: &str) -> ValidationResult<()> {
    if value.chars().count() < min {
        Validation::Failure(ValidationFailure::message(message::min_length(label, min)))
    } else {
        Validation::Success(())
    }
}

/// Validates that a string has at most `max` characters.
///
/// # Example
///
/// ```rust
/// use kensho::{validate_max_length, ValidationResultExt};
///
/// assert!(validate_max_length("短いメモ", 10, "備考").is_success());
///
/// let result = validate_max_length("あいうえお", 3, "備考");
/// assert_eq!(result.error_message(), Some("備考は3文字以内で入力してください"));
/// ```
pub fn validate_max_length(value: &str, max: usize, label: &str) -> ValidationResult<()> {
    if value.chars().count() > max {
        Validation::Failure(ValidationFailure::message(message::max_length(label, max)))
    } else {
        Validation::Success(())
    }
}

/// Validates that a string matches a pattern.
///
/// When `custom_message` is supplied it is used verbatim; otherwise the
/// canned `pattern` message for `label` is rendered.
///
/// # Example
///
/// ```rust
/// use kensho::{patterns, validate_pattern, ValidationResultExt};
///
/// assert!(validate_pattern("03-1234-5678", &patterns::PHONE, "電話番号", None).is_success());
///
/// let result = validate_pattern("not-a-phone", &patterns::PHONE, "電話番号", None);
/// assert_eq!(result.error_message(), Some("電話番号の形式が正しくありません"));
///
/// let result = validate_pattern("x", &patterns::PHONE, "電話番号", Some("ハイフン区切りで入力"));
/// assert_eq!(result.error_message(), Some("ハイフン区切りで入力"));
/// ```
pub fn validate_pattern(
    value: &str,
    pattern: &Regex,
    label: &str,
    custom_message: Option<&str>,
) -> ValidationResult<()> {
    if pattern.is_match(value) {
        Validation::Success(())
    } else {
        let msg = match custom_message {
            Some(custom) => custom.to_string(),
            None => message::pattern(label),
        };
        Validation::Failure(ValidationFailure::message(msg))
    }
}
