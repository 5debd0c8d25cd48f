//! Conversion and chaining combinators for [`Outcome`].
//!
//! [`to_result`] and [`to_result_with`] form the guarded boundary: they run a
//! caller-supplied computation and turn whatever it raises into a `Failure`
//! value. The remaining helpers wrap plain values unconditionally or sequence
//! continuations on an existing outcome; those continuations run inside the
//! same boundary.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::*;
//!
//! let mut succeeded = false;
//! let mut failed = false;
//!
//! let outcome = to_result(|| "42".parse::<i32>());
//! let outcome = on_success(outcome, |_| {
//!     succeeded = true;
//!     Ok::<(), std::num::ParseIntError>(())
//! });
//! let _ = on_failure(outcome, |_| {
//!     failed = true;
//!     Ok::<(), std::num::ParseIntError>(())
//! });
//!
//! assert!(succeeded);
//! assert!(!failed);
//! ```

mod captured;
mod guard;

pub use captured::CapturedError;
#[cfg(feature = "std")]
pub use captured::PanicMessage;
pub(crate) use guard::run_guarded;
pub use guard::{to_result, to_result_with, try_outcome};

use crate::types::alloc_type::String;
use crate::types::{Failure, Outcome};

/// Wraps `value` in a `Success`. Never fails.
///
/// # Examples
///
/// ```
/// use result_rail::convert::to_success;
/// use result_rail::types::Outcome;
///
/// let outcome: Outcome<i32> = to_success(200);
/// assert_eq!(outcome.as_success(), Some(&200));
/// ```
#[inline]
pub fn to_success<S, F>(value: S) -> Outcome<S, F> {
    Outcome::Success(value)
}

/// Wraps `value` in a `Failure` with an empty message. Never fails.
#[inline]
pub fn to_failure<S, F>(value: F) -> Outcome<S, F> {
    Outcome::failure_value(value)
}

/// Wraps `value` in a `Failure` explained by `message`. Never fails.
///
/// # Examples
///
/// ```
/// use result_rail::convert::{failure_message, to_failure_with_message};
/// use result_rail::types::Outcome;
///
/// let error: Outcome<(), i32> = to_failure_with_message(404, "Page not found");
/// assert!(error.is_failure());
/// assert_eq!(failure_message(&error), "Page not found");
/// ```
#[inline]
pub fn to_failure_with_message<S, F, M>(value: F, message: M) -> Outcome<S, F>
where
    M: Into<String>,
{
    Outcome::failure_with(value, message)
}

/// The message of a `Failure`, or `""` when the outcome is a success.
#[inline]
pub fn failure_message<S, F>(outcome: &Outcome<S, F>) -> &str {
    outcome.failure_message()
}

/// Invokes `continuation` only if `outcome` is a success.
///
/// See [`Outcome::on_success`].
#[inline]
pub fn on_success<S, F, E, C>(outcome: Outcome<S, F>, continuation: C) -> Outcome<S, F>
where
    C: FnOnce(&S) -> Result<(), E>,
    F: From<CapturedError<E>>,
{
    outcome.on_success(continuation)
}

/// Invokes `continuation` only if `outcome` is a failure.
///
/// See [`Outcome::on_failure`].
#[inline]
pub fn on_failure<S, F, E, C>(outcome: Outcome<S, F>, continuation: C) -> Outcome<S, F>
where
    C: FnOnce(&Failure<F>) -> Result<(), E>,
    F: From<CapturedError<E>>,
{
    outcome.on_failure(continuation)
}

/// Feeds the success value of `outcome` to a fallible continuation.
///
/// See [`Outcome::and_then`].
#[inline]
pub fn and_then<S, F, T, E, C>(outcome: Outcome<S, F>, continuation: C) -> Outcome<T, F>
where
    C: FnOnce(S) -> Result<T, E>,
    F: From<CapturedError<E>>,
{
    outcome.and_then(continuation)
}
