//! Containers that combine many results into one.
//!
//! Two strategies live here as separate types:
//!
//! - [`AggregateResult`] - immutable and heterogeneous; extending it builds a
//!   new aggregate and leaves the original as it was. It only answers
//!   success/failure.
//! - [`CompositeResult`] - mutable and homogeneous; its element list is live,
//!   and it exposes a merged status, merged messages and a merged value.
//!
//! # Examples
//!
//! ```
//! use result_rail::aggregate::{AggregateResult, CompositeResult};
//! use result_rail::traits::Classify;
//! use result_rail::types::{Outcome, ResultBuilder, Status};
//!
//! let aggregate = AggregateResult::new()
//!     .with(Outcome::<()>::success())
//!     .with(Outcome::<()>::failure("disk full"));
//! assert!(aggregate.is_failure());
//!
//! let composite: CompositeResult<(), String> = [
//!     ResultBuilder::success().with_message("a".to_string()).build(),
//!     ResultBuilder::undefined().with_message("b".to_string()).build(),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(composite.status(), Status::Undefined);
//! assert_eq!(composite.messages().count(), 2);
//! ```

mod composite;
mod iter;
mod persistent;

pub use composite::CompositeResult;
pub use iter::{Messages, Values};
pub use persistent::{entry, AggregateResult, ResultEntry};
