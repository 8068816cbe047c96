//! Constant predicates.
//!
//! `Always` is the identity of `and`, `Never` the identity of `or`.

use core::convert::Infallible;

use crate::predicate::BiPredicate;

/// Accepts every pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Always;

/// Rejects every pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Never;

impl BiPredicate for Always {
    type Error = Infallible;

    #[inline(always)]
    fn evaluate(&self, _: i64, _: i64) -> Result<bool, Infallible> {
        Ok(true)
    }
}

impl BiPredicate for Never {
    type Error = Infallible;

    #[inline(always)]
    fn evaluate(&self, _: i64, _: i64) -> Result<bool, Infallible> {
        Ok(false)
    }
}
