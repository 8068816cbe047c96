//! Procedural macros for the tola-bipred predicate combinators
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[bi_predicate]` | fn | Named predicate type from `fn(i64, i64) -> bool` |
//! | `pred!()` | - | Combinator chain from a boolean expression |
//!
//! ## Example
//!
//! ```ignore
//! #[bi_predicate]
//! fn left_is_zero(l: i64, _r: i64) -> bool { l == 0 }
//!
//! let p = pred!(Greater & !LeftIsZero);
//! assert!(p.test(5, 3));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Turn a two-operand function into a named predicate type.
///
/// The function is kept as written. A unit struct named after it in
/// UpperCamelCase (or `name = ...`) implements `BiPredicate` by calling it:
/// `-> bool` yields `Error = Infallible`, `-> Result<bool, E>` yields
/// `Error = E`.
///
/// # Usage
/// ```ignore
/// #[bi_predicate]
/// fn left_is_zero(l: i64, _r: i64) -> bool { l == 0 }
///
/// #[bi_predicate(name = Divisible)]
/// fn divides(l: i64, r: i64) -> Result<bool, DivByZero> {
///     if r == 0 { Err(DivByZero) } else { Ok(l % r == 0) }
/// }
///
/// assert!(LeftIsZero.and(Less).test(0, 1));
/// ```
#[proc_macro_attribute]
pub fn bi_predicate(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::BiPredicateArgs);
    let func = parse_macro_input!(item as syn::ItemFn);
    user::expand_bi_predicate(args, func).into()
}

/// Build a predicate from a boolean expression over predicates.
///
/// Operators: `!` (negate), `&` / `&&` (and), `|` / `||` (or), with that
/// precedence, plus parentheses. Operands are paths, calls, macro calls
/// (`all![..]`) and method calls, including turbofish (`p.widen::<E>()`).
/// Short-circuit order follows the written order.
///
/// # Usage
/// ```ignore
/// let p = pred!((Less | Equal) & !within(-10, 10));
/// let q = pred!(limit.by_ref() && Greater);
/// let r = pred!(!any![Less, Equal] | LeftIsZero.widen::<DivByZero>());
/// ```
#[proc_macro]
pub fn pred(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as common::BoolExpr);
    user::expand_pred(expr).into()
}
