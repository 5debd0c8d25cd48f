//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//!
//! let parsed = to_result(|| "7".parse::<u8>());
//! let failed = guarded!("seven".parse::<u8>());
//!
//! let aggregate = AggregateResult::new().with(parsed).with(failed);
//! assert!(aggregate.is_failure());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`guarded!`]
//! - **Types**: [`Status`], [`StatusResult`], [`ResultBuilder`], [`Outcome`], [`Failure`],
//!   [`AggregateResult`], [`CompositeResult`], [`ResultError`], [`CapturedError`]
//! - **Traits**: [`Classify`], [`OutcomeExt`]
//! - **Functions**: [`to_result`], [`to_result_with`], [`to_success`], [`to_failure`]

// Macros
pub use crate::guarded;

// Core types
pub use crate::aggregate::{AggregateResult, CompositeResult};
pub use crate::convert::CapturedError;
pub use crate::types::{Failure, Outcome, ResultBuilder, ResultError, Status, StatusResult};

// Traits
pub use crate::traits::{Classify, OutcomeExt};

// Guarded boundary and wrapping helpers
pub use crate::convert::{to_failure, to_result, to_result_with, to_success};
