//! Schema result normalization.
//!
//! [`validate_data`] is the bridge between the raw schema capability and
//! the universal result shape: success carries the parsed value, failure
//! carries the fixed summary plus the first reported message per field.

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use stillwater::Validation;

use crate::error::ValidationFailure;
use crate::message::VALIDATION_FAILED_MESSAGE;
use crate::path::FieldPath;
use crate::schema::SchemaLike;
use crate::ValidationResult;

/// Validates `data` against `schema` and normalizes the outcome.
///
/// On success the result carries the parsed (possibly coerced) value. On
/// failure it carries the fixed summary
/// `"バリデーションエラーが発生しました"` plus a field-error map built by walking
/// the reported issues and keeping only the first message per field path,
/// in whatever order the schema reports issues.
///
/// This function never panics past its boundary: a schema implementation
/// that panics is contained and surfaced as the same summary-only failure
/// shape.
///
/// # Example
///
/// ```rust
/// use kensho::{validate_data, Schema, ValidationResultExt};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("email", Schema::string().email())
///     .field("age", Schema::number().min(0.0));
///
/// let result = validate_data(&schema, &json!({
///     "name": "田中太郎",
///     "email": "tanaka@example.com",
///     "age": 30,
/// }));
/// assert!(result.is_success());
///
/// let result = validate_data(&schema, &json!({
///     "name": "",
///     "email": "invalid-email",
///     "age": -5,
/// }));
/// assert_eq!(result.error_message(), Some("バリデーションエラーが発生しました"));
/// assert_eq!(result.field_errors().unwrap().len(), 3);
/// ```
pub fn validate_data<S>(schema: &S, data: &Value) -> ValidationResult<Value>
where
    S: SchemaLike + ?Sized,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        schema.validate(data, &FieldPath::root())
    }));

    match outcome {
        Ok(Validation::Success(value)) => Validation::Success(value),
        Ok(Validation::Failure(issues)) => Validation::Failure(ValidationFailure::from_issues(
            VALIDATION_FAILED_MESSAGE,
            &issues,
        )),
        // The schema engine itself broke; there are no per-field issues to
        // report, only the summary.
        Err(_) => Validation::Failure(ValidationFailure::message(VALIDATION_FAILED_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SchemaIssue, SchemaIssues, ValidationResultExt};
    use crate::schema::Schema;
    use serde_json::json;

    struct PanickingSchema;

    impl SchemaLike for PanickingSchema {
        fn validate(&self, _value: &Value, _path: &FieldPath) -> Validation<Value, SchemaIssues> {
            panic!("schema engine exploded");
        }
    }

    struct MultiIssueSchema;

    impl SchemaLike for MultiIssueSchema {
        fn validate(&self, _value: &Value, _path: &FieldPath) -> Validation<Value, SchemaIssues> {
            Validation::Failure(SchemaIssues::from_vec(vec![
                SchemaIssue::new(FieldPath::from_field("name"), "必須です"),
                SchemaIssue::new(FieldPath::from_field("name"), "1文字以上で入力してください"),
            ]))
        }
    }

    #[test]
    fn test_success_carries_parsed_value() {
        let schema = Schema::object().field("age", Schema::number().min(0.0));
        let result = validate_data(&schema, &json!({"age": 30}));

        assert_eq!(result.into_result().unwrap(), json!({"age": 30}));
    }

    #[test]
    fn test_failure_carries_summary_and_field_errors() {
        let schema = Schema::object().field("name", Schema::string().min_len(1));
        let result = validate_data(&schema, &json!({"name": ""}));

        assert!(result.is_failure());
        assert_eq!(result.error_message(), Some(VALIDATION_FAILED_MESSAGE));
        assert!(result.field_errors().unwrap().contains_key("name"));
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let result = validate_data(&MultiIssueSchema, &json!({}));
        let errors = result.field_errors().unwrap().clone();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], "必須です");
    }

    #[test]
    fn test_panicking_schema_is_contained() {
        let result = validate_data(&PanickingSchema, &json!({}));

        assert!(result.is_failure());
        assert_eq!(result.error_message(), Some(VALIDATION_FAILED_MESSAGE));
        assert!(result.field_errors().is_none());
    }

    #[test]
    fn test_works_through_trait_object() {
        let schema: Box<dyn SchemaLike> =
            Box::new(Schema::object().field("name", Schema::string().min_len(1)));
        let result = validate_data(schema.as_ref(), &json!({"name": "田中"}));
        assert!(result.is_success());
    }
}
