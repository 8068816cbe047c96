//! Range checks.

use core::convert::Infallible;

use crate::predicate::BiPredicate;

/// True when both operands lie in the closed range `[low, high]`.
///
/// A range with `low > high` is empty and rejects every pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Within {
    low: i64,
    high: i64,
}

impl Within {
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    pub const fn low(&self) -> i64 {
        self.low
    }

    pub const fn high(&self) -> i64 {
        self.high
    }

    #[inline(always)]
    const fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Shorthand for [`Within::new`].
#[inline(always)]
pub const fn within(low: i64, high: i64) -> Within {
    Within::new(low, high)
}

impl BiPredicate for Within {
    type Error = Infallible;

    #[inline]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, Infallible> {
        Ok(self.contains(left) && self.contains(right))
    }
}
