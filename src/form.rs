//! Per-form validation state.
//!
//! [`FormState`] is the accumulation point a form binds to: the current
//! field-error map, which fields have been touched, the recomputed
//! aggregate validity and the caller-managed submission flag. Transitions
//! are pure; every update returns a new state and leaves the old one
//! intact, so snapshot comparison works for change detection.

use indexmap::{IndexMap, IndexSet};

/// Validation state for one form instance.
///
/// A field present in `errors` is currently invalid; absence means valid or
/// not yet checked. `touched` is monotonic: once a field has been updated
/// it stays touched. `is_valid` is always `errors.is_empty()`, recomputed
/// on every update and never set independently.
///
/// A fresh state reports `is_valid() == false` even though the error map is
/// empty: no field has been confirmed valid yet, and an empty error map at
/// creation time would otherwise vacuously read as valid.
///
/// # Example
///
/// ```rust
/// use kensho::FormState;
///
/// let state = FormState::new();
/// assert!(!state.is_valid());
///
/// let state = state.update("name", Some("氏名は必須です".to_string()));
/// assert_eq!(state.error("name"), Some("氏名は必須です"));
/// assert!(state.is_touched("name"));
/// assert!(!state.is_valid());
///
/// let state = state.update("name", None);
/// assert!(state.is_valid());
/// assert!(state.is_touched("name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    errors: IndexMap<String, String>,
    touched: IndexSet<String>,
    is_valid: bool,
    is_submitting: bool,
}

impl FormState {
    /// Creates the initial state: no errors, nothing touched, invalid by
    /// default, not submitting.
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
            touched: IndexSet::new(),
            is_valid: false,
            is_submitting: false,
        }
    }

    /// Applies one field's new error-or-none and returns the next state.
    ///
    /// `Some(message)` records the field as invalid; `None` clears any
    /// recorded error. Either way the field becomes touched and aggregate
    /// validity is recomputed from the resulting error map. The submission
    /// flag is carried through unchanged.
    #[must_use]
    pub fn update(&self, field: &str, error: Option<String>) -> Self {
        let mut next = self.clone();
        next.touched.insert(field.to_string());
        match error {
            Some(message) => {
                next.errors.insert(field.to_string(), message);
            }
            None => {
                next.errors.shift_remove(field);
            }
        }
        next.is_valid = next.errors.is_empty();
        next
    }

    /// Returns a new state with the submission flag set.
    ///
    /// Everything else is carried through unchanged; the flag is owned by
    /// the caller and never modified by [`FormState::update`].
    #[must_use]
    pub fn with_submitting(&self, is_submitting: bool) -> Self {
        let mut next = self.clone();
        next.is_submitting = is_submitting;
        next
    }

    /// Returns the current error for a field, if any.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns the full field-error map, in first-reported order.
    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    /// Returns true if the field has ever been updated.
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Returns true iff no field currently has an error and at least one
    /// update has run.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the caller-managed submission flag.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
