//! Debounced realtime validation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::schema::SchemaLike;
use crate::validate::validate_data;
use crate::ValidationResult;

/// Debounces schema validation of rapidly changing input.
///
/// Each call to [`RealtimeValidator::validate`] arms a timer for the
/// configured interval, cancelling any timer still pending from an earlier
/// call — the superseded value is never validated and its callback is never
/// invoked. Once input has been quiet for the full interval, the schema
/// runs exactly once against the most recent value and the result is
/// delivered to that call's callback. This holds for arbitrarily long
/// bursts: only the last call of a run spaced closer than the interval
/// produces a callback.
///
/// The pending timer is the only mutable state, owned by this instance and
/// re-armed under a single lock acquisition, so two live timers for one
/// instance are impossible. There is no cancellation API beyond superseding
/// a pending validation with another call; dropping the validator discards
/// a pending timer without validating.
///
/// Must be used within a tokio runtime; the timer is a spawned task.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use kensho::{RealtimeValidator, Schema};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let schema = Arc::new(Schema::string().min_len(1));
/// let validator = RealtimeValidator::new(schema, Duration::from_millis(300));
///
/// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
/// validator.validate(json!("田中"), move |result| {
///     let _ = tx.send(result.is_success());
/// });
///
/// assert_eq!(rx.recv().await, Some(true));
/// # }
/// ```
pub struct RealtimeValidator {
    schema: Arc<dyn SchemaLike>,
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl RealtimeValidator {
    /// Creates a validator for `schema` with the given debounce interval.
    pub fn new(schema: Arc<dyn SchemaLike>, debounce: Duration) -> Self {
        Self {
            schema,
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Submits a new input value for debounced validation.
    ///
    /// Any pending timer is cancelled unconditionally; its value and
    /// callback are discarded. If this call's timer survives the debounce
    /// interval, `callback` is invoked exactly once with the result of
    /// validating `value`.
    pub fn validate<F>(&self, value: Value, callback: F)
    where
        F: FnOnce(ValidationResult<Value>) + Send + 'static,
    {
        let schema = Arc::clone(&self.schema);
        let debounce = self.debounce;

        // Arm: cancel-if-present, then schedule. Holding the lock across
        // both steps keeps "at most one pending timer" true under
        // concurrent calls.
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            callback(validate_data(schema.as_ref(), &value));
        }));
    }
}

impl Drop for RealtimeValidator {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}
