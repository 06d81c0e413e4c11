//! # Kensho
//!
//! A schema-agnostic form validation and form-state engine: the reusable
//! core behind every form in a facility-management application (resident
//! records, medications, absences, contacts).
//!
//! ## Overview
//!
//! The engine is a deterministic transformation layer between raw form
//! input and `{validity, data-or-error}` results. It performs no I/O,
//! persists nothing and knows no business entity: each form supplies its
//! own schema and field labels, and binds the returned errors to its own
//! inputs.
//!
//! ## Core Types
//!
//! - [`ValidationResult`]: the universal result shape — parsed data, or a
//!   [`ValidationFailure`] carrying a message or a per-field error map
//! - [`Schema`]: entry point for declaring field schemas
//! - [`FormState`]: the evolving error/touched/validity state a form binds to
//! - [`RealtimeValidator`]: debounced validation of rapidly changing input
//!
//! ## Example
//!
//! ```rust
//! use kensho::{validate_data, FormState, Schema, ValidationResultExt};
//! use serde_json::json;
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string().min_len(1))
//!     .field("email", Schema::string().email());
//!
//! let result = validate_data(&schema, &json!({
//!     "name": "田中太郎",
//!     "email": "tanaka@example.com",
//! }));
//! assert!(result.is_success());
//!
//! // Invalid input produces one message per failing field, which feeds
//! // straight into the form state.
//! let result = validate_data(&schema, &json!({"name": "", "email": "x"}));
//! let mut state = FormState::new();
//! for (field, message) in result.field_errors().into_iter().flatten() {
//!     state = state.update(field, Some(message.clone()));
//! }
//! assert!(!state.is_valid());
//! ```

pub mod effect;
pub mod error;
pub mod field;
pub mod form;
pub mod message;
pub mod path;
pub mod patterns;
pub mod schema;
pub mod validate;

pub use effect::{validate_async, RealtimeValidator};
pub use error::{SchemaIssue, SchemaIssues, ValidationFailure, ValidationResultExt};
pub use field::{validate_max_length, validate_min_length, validate_pattern, validate_required};
pub use form::FormState;
pub use message::{validation_message, VALIDATION_FAILED_MESSAGE};
pub use path::{FieldPath, PathSegment};
pub use schema::{BooleanSchema, NumberSchema, ObjectSchema, Schema, SchemaLike, StringSchema};
pub use validate::validate_data;

/// Type alias for validation results using ValidationFailure.
pub type ValidationResult<T> = stillwater::Validation<T, ValidationFailure>;
