//! Typed results with status aggregation and guarded computation chaining.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Result
//!
//! ```
//! use result_rail::{ResultBuilder, Status, StatusCode};
//!
//! let result = ResultBuilder::<u32, StatusCode>::failure()
//!     .with_value(3)
//!     .with_message(StatusCode::new(409, "conflict"))
//!     .build();
//!
//! assert_eq!(result.status(), Status::Failure);
//! assert_eq!(result.to_string(), "409:conflict");
//! ```
//!
//! ## Merging Results
//!
//! ```
//! use result_rail::{CompositeResult, ResultError, Status, StatusResult};
//!
//! let mut composite = CompositeResult::<i32, String>::new();
//! composite.push(StatusResult::with_status_and_value(Status::Success, 123));
//! composite.push(StatusResult::with_status_and_value(Status::Success, 0));
//!
//! assert_eq!(composite.status(), Status::Success);
//! assert_eq!(composite.value(), Err(ResultError::InconsistentValues));
//! ```
//!
//! ## Guarded Chaining
//!
//! ```
//! use result_rail::convert::to_result;
//!
//! let mut logged = Vec::new();
//! let outcome = to_result(|| "not a number".parse::<i32>())
//!     .on_success(|v| {
//!         logged.push(format!("parsed {v}"));
//!         Ok::<(), std::num::ParseIntError>(())
//!     })
//!     .on_failure(|failure| {
//!         logged.push(format!("failed: {}", failure.value()));
//!         Ok::<(), std::num::ParseIntError>(())
//!     });
//!
//! assert!(outcome.is_failure());
//! assert_eq!(logged, ["failed: invalid digit found in string"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Result containers: immutable aggregates and live composites
pub mod aggregate;
/// Guarded boundary and chaining combinators
pub mod convert;
/// Guarded-boundary shorthand macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits shared by all result shapes
pub mod traits;
/// Status, result entity, builder and outcome types
pub mod types;

pub use aggregate::{AggregateResult, CompositeResult};
pub use convert::CapturedError;
pub use traits::*;
pub use types::{
    BuildStep, Failure, MessageVec, Outcome, ResultBuilder, ResultError, Status, StatusCode,
    StatusResult, VoidResult,
};
