//! # Layer 2: Composition
//!
//! Builder functions and combinator types producing new predicates from
//! existing ones.
//!
//! ```text
//! compose/
//! ├── ops.rs   - And, Or, Not (short-circuiting)
//! └── adapt.rs - MapErr, Widen (error alignment)
//! ```
//!
//! Every builder is also available as a [`BiPredicate`] method; the free
//! functions read better when composing freshly built operands:
//!
//! ```
//! use tola_bipred::prelude::*;
//! use tola_bipred::compose::{and, not};
//!
//! let strictly_inside = and(within(0, 9), not(equal()));
//! assert!(strictly_inside.test(2, 3));
//! assert!(!strictly_inside.test(3, 3));
//! ```

pub mod ops;
pub mod adapt;

pub use ops::{And, Not, Or};
pub use adapt::{MapErr, Widen};

use crate::predicate::BiPredicate;

/// `lhs AND rhs`, evaluating `rhs` only when `lhs` is `true`.
#[inline]
pub fn and<L, R>(lhs: L, rhs: R) -> And<L, R>
where
    L: BiPredicate,
    R: BiPredicate<Error = L::Error>,
{
    And::new(lhs, rhs)
}

/// `lhs OR rhs`, evaluating `rhs` only when `lhs` is `false`.
#[inline]
pub fn or<L, R>(lhs: L, rhs: R) -> Or<L, R>
where
    L: BiPredicate,
    R: BiPredicate<Error = L::Error>,
{
    Or::new(lhs, rhs)
}

/// `NOT inner`.
#[inline]
pub fn not<P>(inner: P) -> Not<P>
where
    P: BiPredicate,
{
    Not::new(inner)
}

// =============================================================================
// Macros
// =============================================================================

/// Conjunction of any number of predicates, folded left to right.
///
/// `all!()` is [`Always`](crate::primitives::Always).
///
/// ```
/// use tola_bipred::prelude::*;
///
/// let p = tola_bipred::all![greater(), within(0, 10), from_fn(|l, r| (l + r) % 2 == 1)];
/// assert!(p.test(5, 2));
/// assert!(!p.test(5, 3));
/// ```
#[macro_export]
macro_rules! all {
    () => { $crate::primitives::Always };
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let __acc = $first;
        $( let __acc = $crate::BiPredicate::and(__acc, $rest); )*
        __acc
    }};
}

/// Disjunction of any number of predicates, folded left to right.
///
/// `any!()` is [`Never`](crate::primitives::Never).
#[macro_export]
macro_rules! any {
    () => { $crate::primitives::Never };
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let __acc = $first;
        $( let __acc = $crate::BiPredicate::or(__acc, $rest); )*
        __acc
    }};
}
