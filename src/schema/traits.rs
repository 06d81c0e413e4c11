//! The schema capability.
//!
//! The engine understands a schema only through [`SchemaLike`]: attempt to
//! parse a value, return either the parsed value or a non-empty list of
//! per-field issues. Anything implementing that capability plugs into
//! [`validate_data`](crate::validate_data) and
//! [`RealtimeValidator`](crate::RealtimeValidator) unchanged; the builders
//! in this crate are one implementation, not a requirement.

use serde_json::Value;
use stillwater::Validation;

use crate::error::SchemaIssues;
use crate::path::FieldPath;

/// A schema that can validate form data.
///
/// Implementations parse `value` at `path` and either return the parsed
/// (possibly coerced) value or report issues, each carrying the path of the
/// field it concerns. Issues for one field should be reported in the order
/// the schema checks its constraints; downstream normalization keeps only
/// the first per field.
///
/// The `Send + Sync` bounds allow schemas to be shared across threads and
/// held as `Arc<dyn SchemaLike>` by the realtime validator.
///
/// # Example
///
/// ```rust
/// use kensho::{FieldPath, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("age", Schema::number().min(0.0));
///
/// let result = schema.validate(&json!({"name": "田中", "age": 30}), &FieldPath::root());
/// assert!(result.is_success());
/// ```
pub trait SchemaLike: Send + Sync {
    /// Validates a value against this schema.
    ///
    /// Returns `Validation::Success` with the parsed value on success, or
    /// `Validation::Failure` with every issue found on failure.
    fn validate(&self, value: &Value, path: &FieldPath) -> Validation<Value, SchemaIssues>;
}
