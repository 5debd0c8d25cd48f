use crate::types::StatusResult;
use core::iter::FusedIterator;
use core::slice;

/// Iterator over every message of a composite, element by element.
///
/// Created by [`CompositeResult::messages`](crate::aggregate::CompositeResult::messages).
#[derive(Debug, Clone)]
pub struct Messages<'a, T, M> {
    results: slice::Iter<'a, StatusResult<T, M>>,
    current: slice::Iter<'a, M>,
}

impl<'a, T, M> Messages<'a, T, M> {
    pub(crate) fn new(results: &'a [StatusResult<T, M>]) -> Self {
        Self { results: results.iter(), current: <&[M]>::default().iter() }
    }
}

impl<'a, T, M> Iterator for Messages<'a, T, M> {
    type Item = &'a M;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(message) = self.current.next() {
                return Some(message);
            }
            self.current = self.results.next()?.messages().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending: usize = self.results.clone().map(|r| r.messages().len()).sum();
        let len = self.current.len() + pending;
        (len, Some(len))
    }
}

impl<T, M> ExactSizeIterator for Messages<'_, T, M> {}
impl<T, M> FusedIterator for Messages<'_, T, M> {}

/// Iterator over the value of every element of a composite, in order.
///
/// Yields `None` for elements that carry no value. Created by
/// [`CompositeResult::values`](crate::aggregate::CompositeResult::values).
#[derive(Debug, Clone)]
pub struct Values<'a, T, M> {
    results: slice::Iter<'a, StatusResult<T, M>>,
}

impl<'a, T, M> Values<'a, T, M> {
    pub(crate) fn new(results: &'a [StatusResult<T, M>]) -> Self {
        Self { results: results.iter() }
    }
}

impl<'a, T, M> Iterator for Values<'a, T, M> {
    type Item = Option<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.results.next().map(StatusResult::value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.results.size_hint()
    }
}

impl<T, M> DoubleEndedIterator for Values<'_, T, M> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.results.next_back().map(StatusResult::value)
    }
}

impl<T, M> ExactSizeIterator for Values<'_, T, M> {}
impl<T, M> FusedIterator for Values<'_, T, M> {}
