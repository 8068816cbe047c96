//! Logical combinators: `And`, `Or`, `Not`.
//!
//! The left operand is always evaluated first. The right operand is only
//! evaluated when it can still change the result, so its side effects (and
//! errors) are suppressed whenever the left operand already decides.

use crate::predicate::BiPredicate;

/// Conjunction: `lhs AND rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct And<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> And<L, R> {
    pub const fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }

    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    pub fn into_inner(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<L, R> BiPredicate for And<L, R>
where
    L: BiPredicate,
    R: BiPredicate<Error = L::Error>,
{
    type Error = L::Error;

    #[inline]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error> {
        if !self.lhs.evaluate(left, right)? {
            return Ok(false);
        }
        self.rhs.evaluate(left, right)
    }
}

/// Disjunction: `lhs OR rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Or<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Or<L, R> {
    pub const fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }

    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    pub fn into_inner(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<L, R> BiPredicate for Or<L, R>
where
    L: BiPredicate,
    R: BiPredicate<Error = L::Error>,
{
    type Error = L::Error;

    #[inline]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error> {
        if self.lhs.evaluate(left, right)? {
            return Ok(true);
        }
        self.rhs.evaluate(left, right)
    }
}

/// Negation: `NOT inner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Not<P> {
    inner: P,
}

impl<P> Not<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap the negated predicate. `p.negate().into_inner()` is `p` again.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> BiPredicate for Not<P>
where
    P: BiPredicate,
{
    type Error = P::Error;

    #[inline]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Self::Error> {
        self.inner.evaluate(left, right).map(|value| !value)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::convert::Infallible;

    use super::*;
    use crate::InfallibleBiPredicate;
    use crate::primitives::{Greater, Never};

    /// Records how often it is evaluated.
    struct Counting<'a> {
        calls: &'a Cell<usize>,
        value: bool,
    }

    impl BiPredicate for Counting<'_> {
        type Error = Infallible;

        fn evaluate(&self, _: i64, _: i64) -> Result<bool, Infallible> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.value)
        }
    }

    #[test]
    fn test_and_skips_rhs_on_false() {
        let calls = Cell::new(0);
        let p = Greater.and(Counting { calls: &calls, value: true });

        assert!(!p.test(2, 3));
        assert_eq!(calls.get(), 0);

        assert!(p.test(3, 2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_skips_rhs_on_true() {
        let calls = Cell::new(0);
        let p = Greater.or(Counting { calls: &calls, value: false });

        assert!(p.test(3, 2));
        assert_eq!(calls.get(), 0);

        assert!(!p.test(2, 3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_not_evaluates_inner_once() {
        let calls = Cell::new(0);
        let p = Counting { calls: &calls, value: true }.negate();

        assert!(!p.test(0, 0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_accessors() {
        let p = Greater.and(Never);
        assert_eq!(p.lhs(), &Greater);
        assert_eq!(p.rhs(), &Never);
        assert_eq!(p.into_inner(), (Greater, Never));
        assert_eq!(Greater.negate().negate().into_inner().into_inner(), Greater);
    }
}
