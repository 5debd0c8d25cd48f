use crate::types::alloc_type::{String, Vec};
use crate::types::{Status, StatusResult};

/// A single deferred mutation recorded by [`ResultBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep<T, M> {
    /// Overwrites the status.
    Status(Status),
    /// Overwrites the value.
    Value(T),
    /// Appends a message.
    Message(M),
}

impl<T: Clone, M: Clone> BuildStep<T, M> {
    #[inline]
    fn apply(&self, target: &mut StatusResult<T, M>) {
        match self {
            Self::Status(status) => target.set_status(*status),
            Self::Value(value) => target.set_value(value.clone()),
            Self::Message(message) => target.push_message(message.clone()),
        }
    }
}

/// Fluent construction of a [`StatusResult`] from an ordered list of steps.
///
/// Each `with_*` call records a step instead of mutating anything. [`build`]
/// allocates a fresh result and replays every step in registration order, so
/// conflicting steps resolve as last-write-wins and a builder can be built
/// any number of times, each build producing an independent result.
///
/// [`build`]: ResultBuilder::build
///
/// # Examples
///
/// ```
/// use result_rail::types::{ResultBuilder, Status};
///
/// let builder = ResultBuilder::<(), String>::failure()
///     .with_message("a".to_string())
///     .with_message("b".to_string());
///
/// let result = builder.build();
/// assert_eq!(result.status(), Status::Failure);
/// assert_eq!(result.messages(), ["a".to_string(), "b".to_string()]);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBuilder<T, M = String> {
    steps: Vec<BuildStep<T, M>>,
}

impl<T, M> ResultBuilder<T, M> {
    fn seeded(status: Status) -> Self {
        Self { steps: Vec::new() }.with_status(status)
    }

    /// Starts a builder whose first step sets `Status::Success`.
    #[inline]
    pub fn success() -> Self {
        Self::seeded(Status::Success)
    }

    /// Starts a builder whose first step sets `Status::Failure`.
    #[inline]
    pub fn failure() -> Self {
        Self::seeded(Status::Failure)
    }

    /// Starts a builder whose first step sets `Status::Undefined`.
    #[inline]
    pub fn undefined() -> Self {
        Self::seeded(Status::Undefined)
    }

    #[inline]
    pub fn with_status(mut self, status: Status) -> Self {
        self.steps.push(BuildStep::Status(status));
        self
    }

    #[inline]
    pub fn with_value(mut self, value: T) -> Self {
        self.steps.push(BuildStep::Value(value));
        self
    }

    #[inline]
    pub fn with_message(mut self, message: M) -> Self {
        self.steps.push(BuildStep::Message(message));
        self
    }

    /// Records one message step per item, in iteration order.
    pub fn with_messages<I>(self, messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        messages.into_iter().fold(self, Self::with_message)
    }

    /// The recorded steps, in registration order.
    #[inline]
    pub fn steps(&self) -> &[BuildStep<T, M>] {
        &self.steps
    }
}

impl<T: Clone, M: Clone> ResultBuilder<T, M> {
    /// Replays every recorded step onto a new `Undefined` result.
    pub fn build(&self) -> StatusResult<T, M> {
        let mut result = StatusResult::new();
        for step in &self.steps {
            step.apply(&mut result);
        }
        result
    }
}
