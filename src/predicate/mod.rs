//! # Layer 1: The Predicate Capability
//!
//! [`BiPredicate`] maps an ordered pair of `i64` operands to a boolean.
//! Everything else in the crate is built on top of this one method.

use core::convert::Infallible;

use crate::compose::{And, MapErr, Not, Or, Widen};
use crate::error::PredicateError;
use crate::logging::bipred_log;

pub mod func;

pub use func::{FromFn, TryFromFn, from_fn, try_from_fn};

/// A boolean-valued function of two `i64` operands.
///
/// `evaluate` must not mutate state reachable from the predicate. Combinators
/// assume nothing about side effects beyond the order imposed by
/// short-circuiting: the left operand is always evaluated first, the right one
/// only when its result can still change the outcome.
///
/// Failures are reported through [`BiPredicate::Error`]. Predicates that
/// cannot fail use [`Infallible`] and get [`InfallibleBiPredicate::test`].
///
/// ```
/// use tola_bipred::prelude::*;
///
/// let p = greater();
/// let q = from_fn(|l, _| l == 0);
///
/// assert!(!p.and(q).test(5, 3));
/// assert!(p.or(q).test(5, 3));
/// assert!(!p.negate().test(5, 3));
/// ```
pub trait BiPredicate {
    /// Error raised by a failing evaluation. Combinators relay it verbatim.
    type Error;

    /// Evaluate the predicate on `(left, right)`.
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error>;

    /// Short-circuiting conjunction: `other` is only evaluated when `self`
    /// yields `true`.
    #[inline]
    fn and<R>(self, other: R) -> And<Self, R>
    where
        Self: Sized,
        R: BiPredicate<Error = Self::Error>,
    {
        And::new(self, other)
    }

    /// Short-circuiting disjunction: `other` is only evaluated when `self`
    /// yields `false`.
    #[inline]
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        Self: Sized,
        R: BiPredicate<Error = Self::Error>,
    {
        Or::new(self, other)
    }

    /// Logical complement of a successful evaluation.
    #[inline]
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Like [`and`](BiPredicate::and) for an operand that may be absent.
    ///
    /// Fails with [`PredicateError::InvalidArgument`] before anything is
    /// evaluated when `other` is `None`.
    fn try_and<R>(self, other: Option<R>) -> Result<And<Self, R>, PredicateError>
    where
        Self: Sized,
        R: BiPredicate<Error = Self::Error>,
    {
        match other {
            Some(other) => Ok(self.and(other)),
            None => {
                bipred_log!(log::Level::Debug, "compose_rejected", "combinator=and reason=missing_operand");
                Err(PredicateError::missing_operand("and"))
            }
        }
    }

    /// Like [`or`](BiPredicate::or) for an operand that may be absent.
    fn try_or<R>(self, other: Option<R>) -> Result<Or<Self, R>, PredicateError>
    where
        Self: Sized,
        R: BiPredicate<Error = Self::Error>,
    {
        match other {
            Some(other) => Ok(self.or(other)),
            None => {
                bipred_log!(log::Level::Debug, "compose_rejected", "combinator=or reason=missing_operand");
                Err(PredicateError::missing_operand("or"))
            }
        }
    }

    /// Convert evaluation errors with `f`, e.g. to join predicates whose
    /// error types differ.
    #[inline]
    fn map_err<E, F>(self, f: F) -> MapErr<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> E,
    {
        MapErr::new(self, f)
    }

    /// Borrow this predicate so it can be composed without being consumed.
    #[inline]
    fn by_ref(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }
}

/// Predicates that cannot fail.
///
/// Blanket-implemented for every `BiPredicate<Error = Infallible>`.
pub trait InfallibleBiPredicate: BiPredicate<Error = Infallible> {
    /// Evaluate without a `Result` wrapper.
    #[inline]
    fn test(&self, left: i64, right: i64) -> bool {
        match self.evaluate(left, right) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Re-type this predicate's (uninhabited) error as `E` so it can be
    /// composed with fallible predicates.
    #[inline]
    fn widen<E>(self) -> Widen<Self, E>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<P> InfallibleBiPredicate for P where P: BiPredicate<Error = Infallible> + ?Sized {}

// =============================================================================
// Borrowed / owned / shared operands
// =============================================================================

impl<P> BiPredicate for &P
where
    P: BiPredicate + ?Sized,
{
    type Error = P::Error;

    #[inline(always)]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error> {
        (**self).evaluate(left, right)
    }
}

#[cfg(feature = "alloc")]
impl<P> BiPredicate for alloc::boxed::Box<P>
where
    P: BiPredicate + ?Sized,
{
    type Error = P::Error;

    #[inline(always)]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error> {
        (**self).evaluate(left, right)
    }
}

#[cfg(feature = "alloc")]
impl<P> BiPredicate for alloc::sync::Arc<P>
where
    P: BiPredicate + ?Sized,
{
    type Error = P::Error;

    #[inline(always)]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error> {
        (**self).evaluate(left, right)
    }
}

#[cfg(feature = "alloc")]
impl<P> BiPredicate for alloc::rc::Rc<P>
where
    P: BiPredicate + ?Sized,
{
    type Error = P::Error;

    #[inline(always)]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error> {
        (**self).evaluate(left, right)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Always, Greater};

    #[test]
    fn test_try_and_rejects_missing_operand() {
        let err = Greater.try_and(None::<Always>).unwrap_err();
        assert_eq!(err, PredicateError::InvalidArgument { combinator: "and" });
    }

    #[test]
    fn test_try_or_rejects_missing_operand() {
        let err = Greater.try_or(None::<Always>).unwrap_err();
        assert_eq!(err, PredicateError::InvalidArgument { combinator: "or" });
    }

    #[test]
    fn test_try_and_accepts_present_operand() {
        let p = Greater.try_and(Some(Always)).unwrap();
        assert!(p.test(2, 1));
        assert!(!p.test(1, 2));
    }

    #[test]
    fn test_by_ref_keeps_operand_usable() {
        let p = Greater;
        let always = Always;
        let composed = p.by_ref().or(always.by_ref());
        assert!(composed.test(0, 1));
        assert!(p.test(1, 0));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_boxed_and_counted_operands() {
        use alloc::{boxed::Box, rc::Rc, sync::Arc};

        let boxed: Box<dyn BiPredicate<Error = Infallible>> = Box::new(Greater);
        assert!(boxed.test(3, 2));

        let arc = Arc::new(Greater);
        let rc = Rc::new(Greater);
        assert!(!arc.and(rc).test(2, 3));
    }
}
