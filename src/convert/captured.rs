use core::fmt::{self, Display};

#[cfg(feature = "std")]
use crate::types::alloc_type::{Box, String};

/// The error a guarded computation raised, captured as a value.
///
/// `Raised` holds exactly the error the computation returned, moved rather
/// than copied or stringified. With the `std` feature the guarded boundary
/// also intercepts panics and records their message as `Panicked`.
///
/// # Examples
///
/// ```
/// use result_rail::convert::{to_result, CapturedError};
///
/// let outcome = to_result(|| "x".parse::<i32>());
/// let failure = outcome.into_failure().unwrap();
/// assert!(matches!(failure.value(), CapturedError::Raised(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CapturedError<E> {
    /// The computation returned an error.
    Raised(E),
    /// The computation panicked.
    #[cfg(feature = "std")]
    Panicked(PanicMessage),
}

impl<E> CapturedError<E> {
    #[inline]
    pub fn raised(&self) -> Option<&E> {
        match self {
            Self::Raised(error) => Some(error),
            #[cfg(feature = "std")]
            Self::Panicked(_) => None,
        }
    }

    #[inline]
    pub fn into_raised(self) -> Option<E> {
        match self {
            Self::Raised(error) => Some(error),
            #[cfg(feature = "std")]
            Self::Panicked(_) => None,
        }
    }

    #[inline]
    pub fn is_panic(&self) -> bool {
        !matches!(self, Self::Raised(_))
    }

    /// Maps the raised error, leaving a captured panic untouched.
    #[inline]
    pub fn map<G, C>(self, f: C) -> CapturedError<G>
    where
        C: FnOnce(E) -> G,
    {
        match self {
            Self::Raised(error) => CapturedError::Raised(f(error)),
            #[cfg(feature = "std")]
            Self::Panicked(message) => CapturedError::Panicked(message),
        }
    }
}

impl<E> From<E> for CapturedError<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::Raised(error)
    }
}

impl<E: Display> Display for CapturedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raised(error) => Display::fmt(error, f),
            #[cfg(feature = "std")]
            Self::Panicked(message) => write!(f, "panicked: {}", message),
        }
    }
}

impl<E> core::error::Error for CapturedError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Raised(error) => Some(error),
            #[cfg(feature = "std")]
            Self::Panicked(_) => None,
        }
    }
}

/// The message recovered from a panic payload.
///
/// Panics raised with `panic!("literal")` or `panic!("{}", args)` keep their
/// text; any other payload type is recorded as a placeholder.
#[cfg(feature = "std")]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PanicMessage(String);

#[cfg(feature = "std")]
impl PanicMessage {
    const OPAQUE: &'static str = "<non-string panic payload>";

    pub(crate) fn from_payload(payload: Box<dyn core::any::Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => String::from(*message),
                None => String::from(Self::OPAQUE),
            },
        };
        Self(message)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "std")]
impl fmt::Debug for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(feature = "std")]
impl Display for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
