use crate::convert::{run_guarded, CapturedError};
use crate::types::alloc_type::String;
use core::fmt::{self, Display};

/// The failing side of an [`Outcome`]: an immutable value plus a message.
///
/// `Failure<()>` is the payload-free failure that only explains itself
/// through its message; the message defaults to the empty string.
///
/// # Examples
///
/// ```
/// use result_rail::types::Failure;
///
/// let failure = Failure::new(404).with_message("page not found");
/// assert_eq!(failure.value(), &404);
/// assert_eq!(failure.message(), "page not found");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Failure<F = ()> {
    value: F,
    message: String,
}

impl Failure<()> {
    /// Creates a payload-free failure that carries only a message.
    #[inline]
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self { value: (), message: message.into() }
    }
}

impl<F> Failure<F> {
    /// Creates a failure carrying `value` and an empty message.
    #[inline]
    pub fn new(value: F) -> Self {
        Self { value, message: String::new() }
    }

    /// Replaces the message.
    #[inline]
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = message.into();
        self
    }

    #[inline]
    pub const fn value(&self) -> &F {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> F {
        self.value
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn into_parts(self) -> (F, String) {
        (self.value, self.message)
    }

    /// Maps the carried value while keeping the message.
    #[inline]
    pub fn map<G, C>(self, f: C) -> Failure<G>
    where
        C: FnOnce(F) -> G,
    {
        Failure { value: f(self.value), message: self.message }
    }
}

impl<F> Display for Failure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str("failure")
        } else {
            f.write_str(&self.message)
        }
    }
}

/// A strict binary outcome: `Success` with a value, or a [`Failure`].
///
/// With the default type parameters, `Outcome` is the payload-free pair
/// `Success(())` / `Failure<()>`. The success and failure payloads are typed
/// independently, so a guarded computation can succeed with its own value
/// and fail with the error it raised.
///
/// # Type Parameters
///
/// * `S` - The success value type
/// * `F` - The failure value type
///
/// # Examples
///
/// ```
/// use result_rail::types::Outcome;
///
/// let ok: Outcome<&str> = Outcome::success_with("Scooby Doo");
/// assert!(ok.is_success());
/// assert_eq!(ok.as_success(), Some(&"Scooby Doo"));
///
/// let err: Outcome<(), i32> = Outcome::failure_with(404, "page not found");
/// assert!(err.is_failure());
/// assert_eq!(err.failure_message(), "page not found");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<S = (), F = ()> {
    Success(S),
    Failure(Failure<F>),
}

impl<F> Outcome<(), F> {
    /// A success without a payload.
    #[inline]
    pub fn success() -> Self {
        Self::Success(())
    }
}

impl<S> Outcome<S, ()> {
    /// A payload-free failure explained by `message`.
    #[inline]
    pub fn failure<M: Into<String>>(message: M) -> Self {
        Self::Failure(Failure::from_message(message))
    }
}

impl<S, F> Outcome<S, F> {
    #[inline]
    pub fn success_with(value: S) -> Self {
        Self::Success(value)
    }

    /// A failure carrying `value` and an empty message.
    #[inline]
    pub fn failure_value(value: F) -> Self {
        Self::Failure(Failure::new(value))
    }

    #[inline]
    pub fn failure_with<M: Into<String>>(value: F, message: M) -> Self {
        Self::Failure(Failure::new(value).with_message(message))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    #[inline]
    pub fn as_success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[inline]
    pub fn as_failure(&self) -> Option<&Failure<F>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[inline]
    pub fn into_failure(self) -> Option<Failure<F>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// The failure message, or `""` for a success.
    #[inline]
    pub fn failure_message(&self) -> &str {
        match self {
            Self::Success(_) => "",
            Self::Failure(failure) => failure.message(),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<S, Failure<F>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Maps the success value; failures pass through untouched.
    #[inline]
    pub fn map<T, C>(self, f: C) -> Outcome<T, F>
    where
        C: FnOnce(S) -> T,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Feeds the success value to a fallible continuation.
    ///
    /// The continuation runs inside the guarded boundary: an `Err` it returns,
    /// or a panic with `std`, becomes a `Failure` carrying the
    /// [`CapturedError`]. Failures pass through without invoking it.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::convert::to_result;
    ///
    /// let parsed = to_result(|| "41".parse::<i32>())
    ///     .and_then(|n| n.to_string().parse::<i32>().map(|n| n + 1));
    /// assert_eq!(parsed.into_success(), Some(42));
    /// ```
    pub fn and_then<T, E, C>(self, continuation: C) -> Outcome<T, F>
    where
        C: FnOnce(S) -> Result<T, E>,
        F: From<CapturedError<E>>,
    {
        match self {
            Self::Success(value) => match run_guarded(move || continuation(value)) {
                Ok(next) => Outcome::Success(next),
                Err(captured) => Outcome::Failure(Failure::new(F::from(captured))),
            },
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Runs `continuation` only when this is a success.
    ///
    /// The outcome is returned unchanged unless the continuation fails. The
    /// continuation is guarded like [`to_result`](crate::convert::to_result),
    /// so its error, or its panic with `std`, becomes the payload of a new
    /// `Failure` and is never re-raised.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::convert::CapturedError;
    /// use result_rail::types::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, CapturedError<String>> = Outcome::success_with(7);
    /// let outcome = outcome.on_success(|v| {
    ///     seen = Some(*v);
    ///     Ok::<(), String>(())
    /// });
    ///
    /// assert_eq!(seen, Some(7));
    /// assert!(outcome.is_success());
    /// ```
    pub fn on_success<E, C>(self, continuation: C) -> Self
    where
        C: FnOnce(&S) -> Result<(), E>,
        F: From<CapturedError<E>>,
    {
        if let Self::Success(value) = &self {
            if let Err(captured) = run_guarded(|| continuation(value)) {
                return Self::Failure(Failure::new(F::from(captured)));
            }
        }
        self
    }

    /// Runs `continuation` only when this is a failure.
    ///
    /// Mirrors [`on_success`](Outcome::on_success): the outcome comes back
    /// unchanged unless the continuation itself fails or panics.
    pub fn on_failure<E, C>(self, continuation: C) -> Self
    where
        C: FnOnce(&Failure<F>) -> Result<(), E>,
        F: From<CapturedError<E>>,
    {
        if let Self::Failure(failure) = &self {
            if let Err(captured) = run_guarded(|| continuation(failure)) {
                return Self::Failure(Failure::new(F::from(captured)));
            }
        }
        self
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure_value(error),
        }
    }
}

impl<S, F> From<Failure<F>> for Outcome<S, F> {
    #[inline]
    fn from(failure: Failure<F>) -> Self {
        Self::Failure(failure)
    }
}
