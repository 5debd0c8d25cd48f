//! Shorthand macros for the guarded boundary.
//!
//! - [`macro@crate::guarded`] - runs a `Result`-producing block through
//!   [`to_result`](crate::convert::to_result), so `?` can be used freely
//!   inside it and the first error ends up in a `Failure`.
//!
//! # Examples
//!
//! ```
//! use result_rail::guarded;
//!
//! let sum = guarded!({
//!     let a: i32 = "40".parse()?;
//!     let b: i32 = "2".parse()?;
//!     Ok::<_, std::num::ParseIntError>(a + b)
//! });
//!
//! assert_eq!(sum.into_success(), Some(42));
//! ```

/// Wraps a `Result`-producing expression or block in the guarded boundary.
///
/// Expands to [`to_result`](crate::convert::to_result) over a closure that
/// evaluates the input, yielding an
/// `Outcome<T, CapturedError<E>>`.
///
/// # Syntax
///
/// - `guarded!(expr)` - guards a single `Result`-producing expression
/// - `guarded!({ ... })` - guards a block; `?` inside it short-circuits into the failure
///
/// # Examples
///
/// ```
/// use result_rail::guarded;
///
/// let failed = guarded!("not a number".parse::<u64>());
/// assert!(failed.is_failure());
/// ```
#[macro_export]
macro_rules! guarded {
    ($body:block) => {
        $crate::convert::to_result(|| $body)
    };
    ($expr:expr) => {
        $crate::convert::to_result(|| $expr)
    };
}
