//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[bi_predicate]` | on fn | Named predicate type from a function |
//! | `pred!` | function macro | Combinator chain from a boolean expression |

pub mod bi_predicate;
pub mod pred;

pub use bi_predicate::{BiPredicateArgs, expand_bi_predicate};
pub use pred::expand_pred;
