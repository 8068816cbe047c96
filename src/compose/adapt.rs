//! Error adapters used to line up operand error types.

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

use crate::predicate::BiPredicate;

/// Maps evaluation errors through `F`.
///
/// Created by [`BiPredicate::map_err`].
#[derive(Clone, Copy)]
pub struct MapErr<P, F> {
    inner: P,
    f: F,
}

impl<P, F> MapErr<P, F> {
    pub const fn new(inner: P, f: F) -> Self {
        Self { inner, f }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, F, E> BiPredicate for MapErr<P, F>
where
    P: BiPredicate,
    F: Fn(P::Error) -> E,
{
    type Error = E;

    #[inline]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, E> {
        self.inner.evaluate(left, right).map_err(&self.f)
    }
}

impl<P: fmt::Debug, F> fmt::Debug for MapErr<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// An infallible predicate re-typed to report `E`.
///
/// Created by [`InfallibleBiPredicate::widen`](crate::InfallibleBiPredicate::widen).
pub struct Widen<P, E> {
    inner: P,
    _error: PhantomData<fn() -> E>,
}

impl<P, E> Widen<P, E> {
    pub const fn new(inner: P) -> Self {
        Self { inner, _error: PhantomData }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, E> BiPredicate for Widen<P, E>
where
    P: BiPredicate<Error = Infallible>,
{
    type Error = E;

    #[inline(always)]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, E> {
        match self.inner.evaluate(left, right) {
            Ok(value) => Ok(value),
            Err(never) => match never {},
        }
    }
}

impl<P: Clone, E> Clone for Widen<P, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<P: Copy, E> Copy for Widen<P, E> {}

impl<P: fmt::Debug, E> fmt::Debug for Widen<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Widen").field(&self.inner).finish()
    }
}
