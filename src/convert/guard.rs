use crate::convert::CapturedError;
use crate::types::{Failure, Outcome};

/// Runs `computation` inside the guarded boundary.
///
/// Errors come back as `CapturedError::Raised`; with `std`, a panic unwinding
/// out of the computation is caught and comes back as `Panicked`.
pub(crate) fn run_guarded<T, E, C>(computation: C) -> Result<T, CapturedError<E>>
where
    C: FnOnce() -> Result<T, E>,
{
    #[cfg(feature = "std")]
    {
        use crate::convert::PanicMessage;
        use std::panic::{catch_unwind, AssertUnwindSafe};

        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => Err(raised(error)),
            Err(payload) => Err(panicked(PanicMessage::from_payload(payload))),
        }
    }

    #[cfg(not(feature = "std"))]
    {
        computation().map_err(raised)
    }
}

#[inline]
fn raised<E>(error: E) -> CapturedError<E> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        error_type = core::any::type_name::<E>(),
        "guarded computation raised an error; captured as failure"
    );
    CapturedError::Raised(error)
}

#[cfg(feature = "std")]
#[inline]
fn panicked<E>(message: crate::convert::PanicMessage) -> CapturedError<E> {
    #[cfg(feature = "tracing")]
    tracing::warn!(panic = %message, "guarded computation panicked; captured as failure");
    CapturedError::Panicked(message)
}

/// Invokes a computation and wraps its outcome.
///
/// `Ok(value)` becomes `Success(value)`; `Err(error)` becomes a `Failure`
/// whose value is the very same `error`, wrapped in
/// [`CapturedError::Raised`]. With the `std` feature a panic is captured too.
/// Nothing escapes: this is where uncontrolled failures turn into values.
///
/// # Examples
///
/// ```
/// use result_rail::convert::to_result;
///
/// let ok = to_result(|| Ok::<_, String>("ok"));
/// assert_eq!(ok.into_success(), Some("ok"));
///
/// let failed = to_result(|| "nope".parse::<u8>());
/// assert!(failed.is_failure());
/// assert_eq!(failed.failure_message(), "");
/// ```
pub fn to_result<T, E, C>(computation: C) -> Outcome<T, CapturedError<E>>
where
    C: FnOnce() -> Result<T, E>,
{
    match run_guarded(computation) {
        Ok(value) => Outcome::Success(value),
        Err(captured) => Outcome::Failure(Failure::new(captured)),
    }
}

/// Lifts `value` through a possibly failing `transform`, guarded the same way
/// as [`to_result`].
///
/// # Examples
///
/// ```
/// use result_rail::convert::to_result_with;
///
/// let doubled = to_result_with(21, |n: i32| n.checked_mul(2).ok_or("overflow"));
/// assert_eq!(doubled.into_success(), Some(42));
/// ```
pub fn to_result_with<V, T, E, C>(value: V, transform: C) -> Outcome<T, CapturedError<E>>
where
    C: FnOnce(V) -> Result<T, E>,
{
    to_result(move || transform(value))
}

/// Guards a computation that already produces an outcome.
///
/// The computation's own outcome is returned as is; only a panic (with
/// `std`) is converted into a `Failure`.
pub fn try_outcome<T, E, C>(computation: C) -> Outcome<T, CapturedError<E>>
where
    C: FnOnce() -> Outcome<T, CapturedError<E>>,
{
    match run_guarded(move || Ok::<_, E>(computation())) {
        Ok(outcome) => outcome,
        Err(captured) => Outcome::Failure(Failure::new(captured)),
    }
}
