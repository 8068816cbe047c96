//! Composition-time errors.
//!
//! Evaluation errors are never represented here: every combinator relays
//! the operand's own `BiPredicate::Error` untouched.

use thiserror::Error;

/// Error raised while building a composed predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// A combinator was handed an absent operand.
    #[error("`{combinator}` requires an operand predicate, but none was given")]
    InvalidArgument {
        /// Name of the combinator that rejected the operand (`"and"`, `"or"`).
        combinator: &'static str,
    },
}

impl PredicateError {
    pub(crate) const fn missing_operand(combinator: &'static str) -> Self {
        Self::InvalidArgument { combinator }
    }

    /// Name of the combinator that raised this error.
    pub fn combinator(&self) -> &'static str {
        match self {
            Self::InvalidArgument { combinator } => combinator,
        }
    }
}
