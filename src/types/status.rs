use core::fmt::{self, Display};

/// Tri-state classification of a result.
///
/// `Undefined` is the initial state of every freshly created
/// [`StatusResult`](crate::types::StatusResult).
///
/// # Examples
///
/// ```
/// use result_rail::types::Status;
///
/// assert_eq!(Status::default(), Status::Undefined);
/// assert!(Status::Failure.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Status {
    /// Unset; the producer has not classified the outcome.
    #[default]
    Undefined,
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Failure,
}

impl Status {
    /// Returns `true` if the status has not been set.
    #[inline]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }

    /// Reduces a sequence of statuses to one composite status.
    ///
    /// A single `Failure` makes the whole sequence a `Failure`. Otherwise the
    /// sequence is a `Success` only when every element is a `Success`, which
    /// includes the empty sequence. Anything else is `Undefined`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::types::Status;
    ///
    /// assert_eq!(Status::merge([Status::Success, Status::Success]), Status::Success);
    /// assert_eq!(Status::merge([Status::Success, Status::Undefined]), Status::Undefined);
    /// assert_eq!(Status::merge([Status::Undefined, Status::Failure]), Status::Failure);
    /// ```
    pub fn merge<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        let mut all_success = true;
        for status in statuses {
            match status {
                Self::Failure => return Self::Failure,
                Self::Undefined => all_success = false,
                Self::Success => {},
            }
        }

        if all_success {
            Self::Success
        } else {
            Self::Undefined
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Undefined => "undefined",
            Self::Success => "success",
            Self::Failure => "failure",
        };
        f.write_str(label)
    }
}
