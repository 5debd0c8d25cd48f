use crate::types::alloc_type::String;
use core::fmt::{self, Display};

/// A numeric code paired with a human readable message.
///
/// A ready-made message type for [`StatusResult`](crate::types::StatusResult)
/// when plain strings are not enough.
///
/// # Examples
///
/// ```
/// use result_rail::types::StatusCode;
///
/// let code = StatusCode::new(404, "page not found");
/// assert_eq!(code.to_string(), "404:page not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusCode {
    code: i32,
    message: String,
}

impl StatusCode {
    #[inline]
    pub fn new<S: Into<String>>(code: i32, message: S) -> Self {
        Self { code, message: message.into() }
    }

    #[inline]
    pub const fn code(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.code, self.message)
    }
}
