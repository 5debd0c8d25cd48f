//! Core traits shared across result shapes.
//!
//! - [`Classify`]: the success/failure capability every result exposes
//! - [`OutcomeExt`]: method-call sugar for wrapping plain values into outcomes
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{Classify, OutcomeExt};
//! use result_rail::types::Outcome;
//!
//! let outcome: Outcome<i32> = 200.to_success();
//! assert!(Classify::is_success(&outcome));
//! ```

pub mod classify;
pub mod outcome_ext;

pub use classify::Classify;
pub use outcome_ext::OutcomeExt;
