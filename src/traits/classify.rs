use crate::types::alloc_type::{Arc, Box, Rc};
use crate::types::{Failure, Outcome, Status, StatusResult};

/// The success/failure capability shared by every result shape.
///
/// Containers such as [`AggregateResult`](crate::aggregate::AggregateResult)
/// only ever ask an element these two questions, which is what lets them hold
/// results with unrelated value types side by side.
///
/// `is_failure` defaults to `!is_success`. Tri-state implementors override it
/// so that an undefined result is neither.
///
/// # Examples
///
/// ```
/// use result_rail::traits::Classify;
/// use result_rail::types::{Status, StatusResult};
///
/// let undefined = StatusResult::<i32, String>::new();
/// assert!(!undefined.is_success());
/// assert!(!undefined.is_failure());
///
/// let parsed: Result<i32, std::num::ParseIntError> = "12".parse();
/// assert!(Classify::is_success(&parsed));
/// ```
pub trait Classify {
    fn is_success(&self) -> bool;

    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl Classify for Status {
    #[inline]
    fn is_success(&self) -> bool {
        Status::is_success(*self)
    }

    #[inline]
    fn is_failure(&self) -> bool {
        Status::is_failure(*self)
    }
}

impl<T, M> Classify for StatusResult<T, M> {
    #[inline]
    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.status().is_failure()
    }
}

impl<S, F> Classify for Outcome<S, F> {
    #[inline]
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }
}

impl<F> Classify for Failure<F> {
    #[inline]
    fn is_success(&self) -> bool {
        false
    }
}

impl<T, E> Classify for Result<T, E> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }
}

impl<C: Classify + ?Sized> Classify for &C {
    #[inline]
    fn is_success(&self) -> bool {
        (**self).is_success()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        (**self).is_failure()
    }
}

impl<C: Classify + ?Sized> Classify for Box<C> {
    #[inline]
    fn is_success(&self) -> bool {
        (**self).is_success()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        (**self).is_failure()
    }
}

impl<C: Classify + ?Sized> Classify for Arc<C> {
    #[inline]
    fn is_success(&self) -> bool {
        (**self).is_success()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        (**self).is_failure()
    }
}

impl<C: Classify + ?Sized> Classify for Rc<C> {
    #[inline]
    fn is_success(&self) -> bool {
        (**self).is_success()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        (**self).is_failure()
    }
}
