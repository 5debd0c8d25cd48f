use core::fmt::{self, Display};

/// Structural misuse of the result containers.
///
/// These are programming errors rather than expected runtime outcomes, so
/// they are returned straight to the caller and never folded into a
/// [`Failure`](crate::types::Failure).
///
/// # Examples
///
/// ```
/// use result_rail::aggregate::CompositeResult;
/// use result_rail::types::ResultError;
///
/// let composite = CompositeResult::<i32, String>::new();
/// assert_eq!(composite.value(), Err(ResultError::EmptyAggregate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultError {
    /// A value was requested from a composite holding no results.
    EmptyAggregate,
    /// A value was requested from a composite whose results disagree.
    InconsistentValues,
    /// A required collection argument was absent.
    NullArgument { name: &'static str },
}

impl Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAggregate => f.write_str("no results exist"),
            Self::InconsistentValues => f.write_str("multiple result values exist"),
            Self::NullArgument { name } => write!(f, "argument `{}` was null", name),
        }
    }
}

impl core::error::Error for ResultError {}
