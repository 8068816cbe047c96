//! Closure adapters.

use core::convert::Infallible;
use core::fmt;

use super::BiPredicate;

/// Predicate backed by a `Fn(i64, i64) -> bool` closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wrap an infallible closure as a [`BiPredicate`].
///
/// ```
/// use tola_bipred::prelude::*;
///
/// let diagonal = from_fn(|l, r| l == r);
/// assert!(diagonal.test(7, 7));
/// ```
#[inline]
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(i64, i64) -> bool,
{
    FromFn(f)
}

impl<F> BiPredicate for FromFn<F>
where
    F: Fn(i64, i64) -> bool,
{
    type Error = Infallible;

    #[inline(always)]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Infallible> {
        Ok((self.0)(left, right))
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Predicate backed by a `Fn(i64, i64) -> Result<bool, E>` closure.
///
/// Created by [`try_from_fn`].
#[derive(Clone, Copy)]
pub struct TryFromFn<F>(F);

/// Wrap a fallible closure as a [`BiPredicate`] with `Error = E`.
#[inline]
pub fn try_from_fn<F, E>(f: F) -> TryFromFn<F>
where
    F: Fn(i64, i64) -> Result<bool, E>,
{
    TryFromFn(f)
}

impl<F, E> BiPredicate for TryFromFn<F>
where
    F: Fn(i64, i64) -> Result<bool, E>,
{
    type Error = E;

    #[inline(always)]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, E> {
        (self.0)(left, right)
    }
}

impl<F> fmt::Debug for TryFromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFromFn").finish_non_exhaustive()
    }
}
