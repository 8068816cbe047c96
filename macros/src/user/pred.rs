use proc_macro2::TokenStream as TokenStream2;

use crate::common::{BoolExpr, bool_expr_to_predicate};

/// `pred!(A & !B | c(1, 2))` expands to
/// `or(and(A, negate(B)), c(1, 2))` spelled with `BiPredicate` methods.
pub fn expand_pred(expr: BoolExpr) -> TokenStream2 {
    bool_expr_to_predicate(&expr)
}
