//! Object schema validation.
//!
//! This module provides [`ObjectSchema`] for validating whole form values:
//! a declared set of fields, each with its own schema, with issues from
//! every failing field accumulated.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::{SchemaIssue, SchemaIssues};
use crate::path::FieldPath;

use super::traits::SchemaLike;

/// Definition of a field within an object schema.
struct FieldDef {
    schema: Box<dyn SchemaLike>,
    required: bool,
    missing_message: Option<String>,
}

/// A schema for validating form objects.
///
/// `ObjectSchema` validates that a value is an object and checks each
/// declared field against its schema. Issues accumulate across fields in
/// declaration order, so a form with three bad inputs reports all three.
/// Undeclared keys are ignored and dropped from the parsed output; the
/// validated object contains declared fields only.
///
/// Schemas nest: an `ObjectSchema` is itself a [`SchemaLike`], so a field
/// may hold another object schema, and issue paths grow accordingly
/// (`contact.email`).
///
/// # Example
///
/// ```rust
/// use kensho::{FieldPath, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("age", Schema::number().min(0.0))
///     .optional("email", Schema::string().email());
///
/// let result = schema.validate(
///     &json!({"name": "田中太郎", "age": 30}),
///     &FieldPath::root(),
/// );
/// assert!(result.is_success());
/// ```
pub struct ObjectSchema {
    fields: IndexMap<String, FieldDef>,
    type_error_message: Option<String>,
}

impl ObjectSchema {
    /// Creates a new object schema with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            type_error_message: None,
        }
    }

    /// Adds a required field to the schema.
    ///
    /// The field must be present in the input object and its value must
    /// pass validation against the provided schema. A missing field is
    /// reported as `"必須です"` at the field's path (override with
    /// [`ObjectSchema::missing_message`]).
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.fields.insert(
            name.into(),
            FieldDef {
                schema: Box::new(schema),
                required: true,
                missing_message: None,
            },
        );
        self
    }

    /// Adds an optional field to the schema.
    ///
    /// The field may be absent or `null`. When present and non-null, its
    /// value must pass validation against the provided schema.
    pub fn optional<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.fields.insert(
            name.into(),
            FieldDef {
                schema: Box::new(schema),
                required: false,
                missing_message: None,
            },
        );
        self
    }

    /// Overrides the missing-field message for the most recently added field.
    pub fn missing_message(mut self, message: impl Into<String>) -> Self {
        if let Some(def) = self.fields.values_mut().next_back() {
            def.missing_message = Some(message.into());
        }
        self
    }

    /// Sets a custom error message for type errors.
    ///
    /// This message is used when the input value is not an object.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for ObjectSchema {
    fn validate(&self, value: &Value, path: &FieldPath) -> Validation<Value, SchemaIssues> {
        let obj = match value.as_object() {
            Some(o) => o,
            None => {
                let message = self
                    .type_error_message
                    .clone()
                    .unwrap_or_else(|| "入力内容が正しくありません".to_string());
                return Validation::Failure(SchemaIssues::single(SchemaIssue::new(
                    path.clone(),
                    message,
                )));
            }
        };

        let mut issues = Vec::new();
        let mut validated = Map::new();

        for (name, field_def) in &self.fields {
            let field_path = path.push_field(name);

            match obj.get(name) {
                Some(Value::Null) | None if !field_def.required => {
                    // Absent optional field, nothing to check or emit.
                }
                Some(field_value) => {
                    match field_def.schema.validate(field_value, &field_path) {
                        Validation::Success(v) => {
                            validated.insert(name.clone(), v);
                        }
                        Validation::Failure(e) => {
                            issues.extend(e.into_iter());
                        }
                    }
                }
                None => {
                    let msg = field_def
                        .missing_message
                        .clone()
                        .unwrap_or_else(|| "必須です".to_string());
                    issues.push(SchemaIssue::new(field_path, msg));
                }
            }
        }

        if issues.is_empty() {
            Validation::Success(Value::Object(validated))
        } else {
            Validation::Failure(SchemaIssues::from_vec(issues))
        }
    }
}
