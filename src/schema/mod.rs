//! Schema builders for form validation.
//!
//! This module provides the [`SchemaLike`] capability trait the engine
//! depends on, plus builder implementations for the field types the
//! application's forms actually use: strings, numbers, booleans and
//! objects. Builders report every violated constraint; normalization in
//! [`validate_data`](crate::validate_data) reduces that to one message per
//! field.
//!
//! # Example
//!
//! ```rust
//! use kensho::{FieldPath, Schema, SchemaLike};
//! use serde_json::json;
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string().min_len(1).max_len(50))
//!     .field("email", Schema::string().email())
//!     .field("age", Schema::number().min(0.0));
//!
//! let result = schema.validate(
//!     &json!({"name": "田中太郎", "email": "tanaka@example.com", "age": 30}),
//!     &FieldPath::root(),
//! );
//! assert!(result.is_success());
//! ```

mod boolean;
mod numeric;
mod object;
mod string;
mod traits;

pub use boolean::BooleanSchema;
pub use numeric::NumberSchema;
pub use object::ObjectSchema;
pub use string::StringSchema;
pub use traits::SchemaLike;

/// Entry point for creating validation schemas.
///
/// `Schema` provides factory methods for the builder types. Each builder
/// adds constraints through chained methods and implements [`SchemaLike`].
///
/// # Example
///
/// ```rust
/// use kensho::Schema;
///
/// let name = Schema::string().min_len(1).max_len(50);
/// let age = Schema::number().min(0.0).integer();
/// ```
pub struct Schema;

impl Schema {
    /// Creates a new string schema.
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a new number schema.
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Creates a new boolean schema.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new()
    }

    /// Creates a new object schema.
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }
}
