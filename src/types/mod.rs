//! Result types and utilities.
//!
//! This module holds the building blocks every other module works with:
//! the tri-state [`Status`], the mutable [`StatusResult`] entity and its
//! [`ResultBuilder`], and the strict two-case [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use result_rail::types::{ResultBuilder, Status};
//!
//! let result = ResultBuilder::<i32, String>::failure()
//!     .with_value(404)
//!     .with_message("page not found".to_string())
//!     .build();
//!
//! assert_eq!(result.status(), Status::Failure);
//! assert_eq!(result.value(), Some(&404));
//! assert_eq!(result.messages(), ["page not found".to_string()]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod builder;
pub mod error;
pub mod outcome;
pub mod status;
pub mod status_code;
pub mod status_result;

pub use builder::*;
pub use error::*;
pub use outcome::*;
pub use status::*;
pub use status_code::*;
pub use status_result::*;

/// SmallVec-backed collection holding the messages of a single result.
///
/// Uses inline storage for one message, so the common "no message" and
/// "one message" cases never touch the heap.
pub type MessageVec<M> = SmallVec<[M; 1]>;
