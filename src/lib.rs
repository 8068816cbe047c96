#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables boxed and shared predicates in no_std

//! # tola-bipred
//!
//! Composable boolean predicates over pairs of `i64` operands.
//!
//! A [`BiPredicate`] answers a yes/no question about an ordered pair of
//! integers (indices, coordinates, counters) without boxing the operands.
//! Predicates compose with `and`, `or` and `negate` into new predicates of
//! the same shape, and composition is zero-cost: `And<Greater, Within>` is a
//! plain struct whose `evaluate` inlines to two comparisons.
//!
//! ## Short-circuiting
//!
//! The left operand of `and`/`or` is always evaluated first. The right
//! operand is only evaluated when it can still change the result, so its
//! side effects and errors are suppressed when the left operand decides.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Always / Never, Less .. NotEqual, Within                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Predicate Capability                                    |
//! |  - BiPredicate (evaluate, and, or, negate, try_and, try_or)       |
//! |  - from_fn / try_from_fn closure adapters                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Composition                                             |
//! |  - And, Or, Not, MapErr, Widen, all!, any!                        |
//! |  - SharedBiPredicate (type-erased, Arc-backed)                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - #[bi_predicate], pred!                                         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Errors
//!
//! - Evaluation errors are the predicate's own [`BiPredicate::Error`];
//!   combinators relay them unchanged. Infallible predicates use
//!   [`core::convert::Infallible`] and get [`InfallibleBiPredicate::test`].
//! - Building with an absent operand ([`BiPredicate::try_and`],
//!   [`BiPredicate::try_or`]) fails with [`PredicateError::InvalidArgument`].
//!
//! ## Quick Start
//!
//! ```
//! use tola_bipred::prelude::*;
//!
//! #[bi_predicate]
//! fn left_is_zero(l: i64, _r: i64) -> bool {
//!     l == 0
//! }
//!
//! let p = pred!(Greater & !LeftIsZero | within(-1, 1));
//!
//! assert!(p.test(5, 3));
//! assert!(!p.test(0, -3));
//! assert!(p.test(0, 1));
//! ```

// Allow `::tola_bipred` to work inside the crate itself
extern crate self as tola_bipred;

#[cfg(feature = "alloc")]
extern crate alloc;

mod logging;

pub mod error;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Predicate Capability
// =============================================================================
pub mod predicate;

// =============================================================================
// Layer 2: Composition
// =============================================================================
pub mod compose;

#[cfg(feature = "alloc")]
pub mod shared;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::PredicateError;
pub use predicate::{BiPredicate, FromFn, InfallibleBiPredicate, TryFromFn, from_fn, try_from_fn};
pub use compose::{And, MapErr, Not, Or, Widen};
#[cfg(feature = "alloc")]
pub use shared::{SharedBiPredicate, shared};

// Re-export proc-macros
pub use macros::{bi_predicate, pred};

/// Common items for building and evaluating predicates.
pub mod prelude {
    pub use crate::predicate::{BiPredicate, InfallibleBiPredicate, from_fn, try_from_fn};
    pub use crate::primitives::{
        Always, Never,
        Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual, Within,
        equal, greater, greater_or_equal, less, less_or_equal, not_equal, within,
    };
    pub use crate::error::PredicateError;
    #[cfg(feature = "alloc")]
    pub use crate::shared::{SharedBiPredicate, shared};
    pub use macros::{bi_predicate, pred};
    // Note: all! and any! are #[macro_export] so they're at crate root
}
