//! Debounce timing tests for the realtime validator.
//!
//! All tests run on a paused tokio clock so timing is exact: `advance`
//! moves time deterministically and yields let spawned timers register and
//! fire.

use std::sync::Arc;
use std::time::Duration;

use kensho::{RealtimeValidator, Schema, ValidationResult};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio::task::yield_now;
use tokio::time::advance;

fn validator(debounce_ms: u64) -> RealtimeValidator {
    let schema = Arc::new(Schema::string().min_len(1));
    RealtimeValidator::new(schema, Duration::from_millis(debounce_ms))
}

fn channel() -> (
    mpsc::UnboundedSender<ValidationResult<Value>>,
    mpsc::UnboundedReceiver<ValidationResult<Value>>,
) {
    mpsc::unbounded_channel()
}

/// Lets freshly spawned timer tasks run up to their sleep point.
async fn settle() {
    for _ in 0..4 {
        yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_burst_coalesces_to_last_value() {
    let validator = validator(300);
    let (tx, mut rx) = channel();

    for value in ["test", "test2", "test3"] {
        let tx = tx.clone();
        validator.validate(json!(value), move |result| {
            let _ = tx.send(result);
        });
    }
    settle().await;

    advance(Duration::from_millis(300)).await;
    settle().await;

    let result = rx.try_recv().expect("exactly one callback");
    assert_eq!(result.into_result().unwrap(), json!("test3"));
    assert!(rx.try_recv().is_err(), "earlier calls must never fire");
}

#[tokio::test(start_paused = true)]
async fn test_second_call_restarts_the_window() {
    let validator = validator(300);
    let (tx, mut rx) = channel();

    let tx1 = tx.clone();
    validator.validate(json!("first"), move |result| {
        let _ = tx1.send(result);
    });
    settle().await;

    advance(Duration::from_millis(200)).await;
    settle().await;

    let tx2 = tx.clone();
    validator.validate(json!("second"), move |result| {
        let _ = tx2.send(result);
    });
    settle().await;

    // 100ms after the second call (300ms after the first): nothing yet.
    advance(Duration::from_millis(100)).await;
    settle().await;
    assert!(rx.try_recv().is_err(), "timer must have been restarted");

    // 300ms after the second call: exactly one callback, second value.
    advance(Duration::from_millis(200)).await;
    settle().await;

    let result = rx.try_recv().expect("exactly one callback");
    assert_eq!(result.into_result().unwrap(), json!("second"));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_long_burst_still_fires_once() {
    let validator = validator(300);
    let (tx, mut rx) = channel();

    // Twenty calls spaced 100ms apart, each inside the previous window.
    for i in 0..20 {
        let tx = tx.clone();
        validator.validate(json!(format!("value{i}")), move |result| {
            let _ = tx.send(result);
        });
        settle().await;
        advance(Duration::from_millis(100)).await;
        settle().await;
        assert!(rx.try_recv().is_err(), "no callback during the burst");
    }

    // Quiet period after the last call (100ms already elapsed above).
    advance(Duration::from_millis(200)).await;
    settle().await;

    let result = rx.try_recv().expect("exactly one callback");
    assert_eq!(result.into_result().unwrap(), json!("value19"));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_validator_is_reusable_after_firing() {
    let validator = validator(300);
    let (tx, mut rx) = channel();

    let tx1 = tx.clone();
    validator.validate(json!("first"), move |result| {
        let _ = tx1.send(result);
    });
    settle().await;
    advance(Duration::from_millis(300)).await;
    settle().await;
    assert!(rx.try_recv().is_ok());

    // Back to idle; a later call arms a fresh timer.
    let tx2 = tx.clone();
    validator.validate(json!("later"), move |result| {
        let _ = tx2.send(result);
    });
    settle().await;
    advance(Duration::from_millis(300)).await;
    settle().await;

    let result = rx.try_recv().expect("second callback");
    assert_eq!(result.into_result().unwrap(), json!("later"));
}

#[tokio::test(start_paused = true)]
async fn test_callback_receives_failure_shape() {
    let schema = Arc::new(
        Schema::object().field("email", Schema::string().email()),
    );
    let validator = RealtimeValidator::new(schema, Duration::from_millis(300));
    let (tx, mut rx) = channel();

    validator.validate(json!({"email": "invalid-email"}), move |result| {
        let _ = tx.send(result);
    });
    settle().await;
    advance(Duration::from_millis(300)).await;
    settle().await;

    let result = rx.try_recv().expect("one callback");
    let failure = result.into_result().unwrap_err();
    assert!(failure.field_errors().unwrap().contains_key("email"));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_discards_pending_timer() {
    let (tx, mut rx) = channel();

    {
        let validator = validator(300);
        validator.validate(json!("doomed"), move |result| {
            let _ = tx.send(result);
        });
        settle().await;
    }

    advance(Duration::from_millis(500)).await;
    settle().await;
    assert!(rx.try_recv().is_err(), "dropped validator must not fire");
}
