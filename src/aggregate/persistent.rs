use crate::traits::Classify;
use crate::types::alloc_type::{Rc, Vec};
use crate::types::ResultError;
use core::fmt::{self, Debug};

/// A shared, type-erased element of an [`AggregateResult`].
pub type ResultEntry = Rc<dyn Classify>;

/// Erases a result into a [`ResultEntry`].
#[inline]
pub fn entry<R>(result: R) -> ResultEntry
where
    R: Classify + 'static,
{
    Rc::new(result)
}

/// An immutable, append-by-reconstruction collection of heterogeneous results.
///
/// The element sequence never changes after construction. [`extend`] and
/// [`with`] build a new aggregate from this one's elements plus the
/// additions and leave `self` untouched; the elements themselves are shared,
/// not copied.
///
/// Only the [`Classify`] capability of the elements is ever consulted, so the
/// elements may carry unrelated value types, including ones that are neither
/// `Send` nor `Sync`. The aggregate is a failure iff any element is a failure,
/// and a success otherwise.
///
/// [`extend`]: AggregateResult::extend
/// [`with`]: AggregateResult::with
///
/// # Examples
///
/// ```
/// use result_rail::aggregate::AggregateResult;
/// use result_rail::traits::Classify;
/// use result_rail::types::Outcome;
///
/// let empty = AggregateResult::new();
/// let one = empty.with(Outcome::<bool>::success_with(true));
/// let two = one.with(Outcome::<(), bool>::failure_value(true));
///
/// assert!(one.is_success());
/// assert!(!two.is_success());
/// assert_eq!(one.len(), 1);
/// ```
#[must_use]
#[derive(Clone)]
pub struct AggregateResult {
    results: Rc<[ResultEntry]>,
}

impl AggregateResult {
    /// Creates an aggregate with no results; it counts as a success.
    #[inline]
    pub fn new() -> Self {
        Self { results: Rc::from(Vec::new()) }
    }

    #[inline]
    pub fn from_result<R>(result: R) -> Self
    where
        R: Classify + 'static,
    {
        Self::from_entries([entry(result)])
    }

    /// Collects same-typed results.
    #[inline]
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator,
        I::Item: Classify + 'static,
    {
        Self::from_entries(results.into_iter().map(entry))
    }

    /// Collects already erased, possibly heterogeneous results.
    #[inline]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ResultEntry>,
    {
        Self { results: entries.into_iter().collect() }
    }

    /// Like [`from_entries`](Self::from_entries), but rejects a missing collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::NullArgument`] when `entries` is `None`.
    pub fn try_from_optional<I>(entries: Option<I>) -> Result<Self, ResultError>
    where
        I: IntoIterator<Item = ResultEntry>,
    {
        let entries = entries.ok_or(ResultError::NullArgument { name: "results" })?;
        Ok(Self::from_entries(entries))
    }

    /// Returns a new aggregate holding this one's results followed by `additions`.
    pub fn extend<I>(&self, additions: I) -> Self
    where
        I: IntoIterator<Item = ResultEntry>,
    {
        let results = self.results.iter().cloned().chain(additions).collect();
        Self { results }
    }

    /// Returns a new aggregate with `result` appended.
    #[inline]
    pub fn with<R>(&self, result: R) -> Self
    where
        R: Classify + 'static,
    {
        self.extend([entry(result)])
    }

    /// The full, ordered, read-only element view.
    #[inline]
    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ResultEntry> {
        self.results.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Default for AggregateResult {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Classify for AggregateResult {
    #[inline]
    fn is_success(&self) -> bool {
        !self.is_failure()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.results.iter().any(|result| result.is_failure())
    }
}

impl Debug for AggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateResult")
            .field("count", &self.len())
            .field("is_success", &self.is_success())
            .finish()
    }
}

impl FromIterator<ResultEntry> for AggregateResult {
    #[inline]
    fn from_iter<I: IntoIterator<Item = ResultEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<'a> IntoIterator for &'a AggregateResult {
    type Item = &'a ResultEntry;
    type IntoIter = core::slice::Iter<'a, ResultEntry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
