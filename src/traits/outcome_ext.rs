//! Extension trait for wrapping plain values into outcomes.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::OutcomeExt;
//! use result_rail::types::Outcome;
//!
//! let ok: Outcome<&str> = "Scooby Doo".to_success();
//! assert!(ok.is_success());
//!
//! let not_found: Outcome<(), i32> = 404.to_failure_with("Page not found");
//! assert_eq!(not_found.failure_message(), "Page not found");
//! ```

use crate::convert::{self, CapturedError};
use crate::types::alloc_type::String;
use crate::types::Outcome;

/// Method-call forms of the [`convert`] helpers, available on every value.
pub trait OutcomeExt: Sized {
    /// Wraps `self` in a `Success`.
    fn to_success<F>(self) -> Outcome<Self, F>;

    /// Wraps `self` in a `Failure` with an empty message.
    fn to_failure<S>(self) -> Outcome<S, Self>;

    /// Wraps `self` in a `Failure` explained by `message`.
    fn to_failure_with<S, M: Into<String>>(self, message: M) -> Outcome<S, Self>;

    /// Lifts `self` through a fallible `transform` inside the guarded boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::OutcomeExt;
    ///
    /// let parsed = "123".guard_map(|s: &str| s.parse::<u32>());
    /// assert_eq!(parsed.into_success(), Some(123));
    /// ```
    fn guard_map<T, E, C>(self, transform: C) -> Outcome<T, CapturedError<E>>
    where
        C: FnOnce(Self) -> Result<T, E>;
}

impl<V> OutcomeExt for V {
    #[inline]
    fn to_success<F>(self) -> Outcome<Self, F> {
        convert::to_success(self)
    }

    #[inline]
    fn to_failure<S>(self) -> Outcome<S, Self> {
        convert::to_failure(self)
    }

    #[inline]
    fn to_failure_with<S, M: Into<String>>(self, message: M) -> Outcome<S, Self> {
        convert::to_failure_with_message(self, message)
    }

    #[inline]
    fn guard_map<T, E, C>(self, transform: C) -> Outcome<T, CapturedError<E>>
    where
        C: FnOnce(Self) -> Result<T, E>,
    {
        convert::to_result_with(self, transform)
    }
}
