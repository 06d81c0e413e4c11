//! Asynchronous validation.
//!
//! This module holds the two suspending pieces of the engine:
//!
//! - [`validate_async`] wraps an arbitrary asynchronous predicate into the
//!   universal result shape, treating a rejected predicate the same as one
//!   that answered no.
//! - [`RealtimeValidator`] debounces schema validation of rapidly changing
//!   input, so only the most recent value of a burst is ever validated.
//!
//! Everything else in the crate is synchronous and runs to completion.

mod async_validator;
mod realtime;

pub use async_validator::validate_async;
pub use realtime::RealtimeValidator;
