// Common utilities shared by the user-facing macros
//
// This module contains:
// - bool_expr: Boolean expression parsing and code generation
// - naming: Identifier case conversion

mod bool_expr;
mod naming;

pub use bool_expr::*;
pub use naming::*;
