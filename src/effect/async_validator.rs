//! Asynchronous predicate validation.

use std::future::Future;

use stillwater::Validation;

use crate::error::ValidationFailure;
use crate::ValidationResult;

/// Runs an asynchronous predicate and wraps the outcome in the universal
/// result shape.
///
/// The predicate receives a clone of `data` and answers with
/// `Result<bool, E>`. `Ok(true)` produces a valid result carrying `data`.
/// `Ok(false)` and `Err(_)` both produce an invalid result carrying the
/// caller-supplied `error_message` — the two are deliberately
/// indistinguishable, and the underlying error is not leaked into the
/// result. Callers that need diagnostics must log before returning the
/// error from their predicate.
///
/// # Example
///
/// ```rust
/// use kensho::{validate_async, ValidationResultExt};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let result = validate_async(
///     |id: String| async move { Ok::<bool, std::io::Error>(!id.is_empty()) },
///     "resident-42".to_string(),
///     "この利用者IDは使用できません",
/// )
/// .await;
/// assert!(result.is_success());
///
/// let result = validate_async(
///     |_: String| async move { Err::<bool, _>(std::io::Error::other("down")) },
///     "resident-42".to_string(),
///     "この利用者IDは使用できません",
/// )
/// .await;
/// assert_eq!(result.error_message(), Some("この利用者IDは使用できません"));
/// # }
/// ```
pub async fn validate_async<T, F, Fut, E>(
    predicate: F,
    data: T,
    error_message: impl Into<String>,
) -> ValidationResult<T>
where
    T: Clone,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    match predicate(data.clone()).await {
        Ok(true) => Validation::Success(data),
        Ok(false) | Err(_) => Validation::Failure(ValidationFailure::message(error_message)),
    }
}
