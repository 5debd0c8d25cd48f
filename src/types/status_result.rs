use crate::types::alloc_type::String;
use crate::types::{MessageVec, Status};
use core::fmt::{self, Display};

/// The general, mutable result entity: a status, an optional value, and an
/// ordered list of messages.
///
/// Status, value and messages are independent of each other. A result may be
/// `Undefined` and still carry a value, or be a `Success` with warnings in its
/// messages; nothing here enforces a relationship between them.
///
/// # Type Parameters
///
/// * `T` - The value type
/// * `M` - The message type
///
/// # Examples
///
/// ```
/// use result_rail::types::{Status, StatusResult};
///
/// let mut result = StatusResult::<i32, String>::with_value(7);
/// assert_eq!(result.status(), Status::Undefined);
///
/// result.set_status(Status::Success);
/// result.push_message("computed from cache".to_string());
///
/// assert_eq!(result.value(), Some(&7));
/// assert_eq!(result.messages().len(), 1);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusResult<T, M = String> {
    status: Status,
    value: Option<T>,
    messages: MessageVec<M>,
}

/// A result that carries no value, only a status and messages.
pub type VoidResult<M = String> = StatusResult<(), M>;

impl<T, M> StatusResult<T, M> {
    /// Creates an `Undefined` result with no value and no messages.
    #[inline]
    pub fn new() -> Self {
        Self { status: Status::Undefined, value: None, messages: MessageVec::new() }
    }

    /// Creates a result with the given status and no value.
    #[inline]
    pub fn with_status(status: Status) -> Self {
        Self { status, value: None, messages: MessageVec::new() }
    }

    /// Creates an `Undefined` result holding `value`; the status still has to be set.
    #[inline]
    pub fn with_value(value: T) -> Self {
        Self::with_status_and_value(Status::Undefined, value)
    }

    /// Creates a result with the given status and value.
    #[inline]
    pub fn with_status_and_value(status: Status, value: T) -> Self {
        Self { status, value: Some(value), messages: MessageVec::new() }
    }

    /// The current status.
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Overwrites the status.
    #[inline]
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// The value, if one has been set.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Overwrites the value.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Removes the value, leaving `None` in its place.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Consumes the result and returns its value.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// The messages, in insertion order.
    #[inline]
    pub fn messages(&self) -> &[M] {
        &self.messages
    }

    /// Mutable access to the message list, for callers that append in bulk.
    #[inline]
    pub fn messages_mut(&mut self) -> &mut MessageVec<M> {
        &mut self.messages
    }

    /// Appends a message.
    #[inline]
    pub fn push_message(&mut self, message: M) {
        self.messages.push(message);
    }

    /// Appends a message and returns the result, for expression-style construction.
    #[inline]
    pub fn with_message(mut self, message: M) -> Self {
        self.messages.push(message);
        self
    }

    /// Splits the result into its status, value and messages.
    #[inline]
    pub fn into_parts(self) -> (Status, Option<T>, MessageVec<M>) {
        (self.status, self.value, self.messages)
    }
}

impl<T, M> Default for StatusResult<T, M> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the messages, one per line.
impl<T, M: Display> Display for StatusResult<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(message, f)?;
        }
        Ok(())
    }
}
