use crate::aggregate::{Messages, Values};
use crate::traits::Classify;
use crate::types::alloc_type::{String, Vec};
use crate::types::{ResultError, Status, StatusResult};

/// A live, mutable collection of same-typed results with merged queries.
///
/// Unlike [`AggregateResult`](crate::aggregate::AggregateResult), the element
/// list is grown in place through [`push`](Self::push) or
/// [`results_mut`](Self::results_mut). Nothing is cached: every query reduces
/// the current list, so appends are visible immediately.
///
/// # Type Parameters
///
/// * `T` - The value type shared by every element
/// * `M` - The message type shared by every element
///
/// # Examples
///
/// ```
/// use result_rail::aggregate::CompositeResult;
/// use result_rail::types::{Status, StatusResult};
///
/// let mut composite = CompositeResult::<i32, String>::new();
/// composite.push(StatusResult::with_status_and_value(Status::Success, 123));
/// composite.push(StatusResult::with_status_and_value(Status::Success, 123));
///
/// assert_eq!(composite.status(), Status::Success);
/// assert_eq!(composite.value(), Ok(Some(&123)));
///
/// composite.push(StatusResult::with_status_and_value(Status::Failure, 0));
/// assert_eq!(composite.status(), Status::Failure);
/// assert!(composite.value().is_err());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeResult<T, M = String> {
    results: Vec<StatusResult<T, M>>,
}

impl<T, M> CompositeResult<T, M> {
    #[inline]
    pub fn new() -> Self {
        Self { results: Vec::new() }
    }

    #[inline]
    pub fn results(&self) -> &[StatusResult<T, M>] {
        &self.results
    }

    /// The live element list; append to it to grow the composite.
    #[inline]
    pub fn results_mut(&mut self) -> &mut Vec<StatusResult<T, M>> {
        &mut self.results
    }

    #[inline]
    pub fn push(&mut self, result: StatusResult<T, M>) {
        self.results.push(result);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[inline]
    pub fn into_results(self) -> Vec<StatusResult<T, M>> {
        self.results
    }

    /// The merged status of every element.
    ///
    /// `Failure` if any element failed; `Success` if every element succeeded;
    /// `Undefined` otherwise. See [`Status::merge`].
    #[inline]
    pub fn status(&self) -> Status {
        Status::merge(self.results.iter().map(StatusResult::status))
    }

    /// Every element's messages, concatenated in element order.
    #[inline]
    pub fn messages(&self) -> Messages<'_, T, M> {
        Messages::new(&self.results)
    }

    /// Every element's value, in element order, without deduplication.
    ///
    /// The iterator borrows the live list, so calling this again after an
    /// append reflects the new element.
    #[inline]
    pub fn values(&self) -> Values<'_, T, M> {
        Values::new(&self.results)
    }

    /// Whether at least one element has exactly `status`.
    #[inline]
    pub fn any(&self, status: Status) -> bool {
        self.results.iter().any(|result| result.status() == status)
    }

    /// The value every element agrees on.
    ///
    /// A single element's value is returned as is. With several elements,
    /// all values must be equal to the first one.
    ///
    /// # Errors
    ///
    /// - [`ResultError::EmptyAggregate`] when the composite holds no results.
    /// - [`ResultError::InconsistentValues`] when the elements disagree.
    pub fn value(&self) -> Result<Option<&T>, ResultError>
    where
        T: PartialEq,
    {
        let Some((first, rest)) = self.results.split_first() else {
            #[cfg(feature = "tracing")]
            tracing::trace!("value requested from an empty composite result");
            return Err(ResultError::EmptyAggregate);
        };

        let value = first.value();
        if rest.iter().all(|result| result.value() == value) {
            Ok(value)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(count = self.results.len(), "composite result values disagree");
            Err(ResultError::InconsistentValues)
        }
    }
}

impl<T, M> Default for CompositeResult<T, M> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> Classify for CompositeResult<T, M> {
    #[inline]
    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.any(Status::Failure)
    }
}

impl<T, M> From<Vec<StatusResult<T, M>>> for CompositeResult<T, M> {
    #[inline]
    fn from(results: Vec<StatusResult<T, M>>) -> Self {
        Self { results }
    }
}

impl<T, M> FromIterator<StatusResult<T, M>> for CompositeResult<T, M> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = StatusResult<T, M>>>(iter: I) -> Self {
        Self { results: iter.into_iter().collect() }
    }
}

impl<T, M> Extend<StatusResult<T, M>> for CompositeResult<T, M> {
    #[inline]
    fn extend<I: IntoIterator<Item = StatusResult<T, M>>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}

impl<'a, T, M> IntoIterator for &'a CompositeResult<T, M> {
    type Item = &'a StatusResult<T, M>;
    type IntoIter = core::slice::Iter<'a, StatusResult<T, M>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
