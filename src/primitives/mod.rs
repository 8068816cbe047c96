//! # Layer 0: Primitives
//!
//! Ready-made predicates:
//! - `constant.rs`: `Always` / `Never`.
//! - `compare.rs`: ordering comparisons between the two operands.
//! - `range.rs`: `Within`, a range check on both operands.

pub mod constant;
pub mod compare;
pub mod range;

pub use constant::{Always, Never};
pub use compare::{
    Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual,
    equal, greater, greater_or_equal, less, less_or_equal, not_equal,
};
pub use range::{Within, within};
