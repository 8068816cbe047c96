// Boolean expression parsing and expansion for `pred!`

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    AngleBracketedGenericArguments, ExprPath, Ident, Token,
    parse::{Parse, ParseStream},
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Pred(TokenStream),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary
// `&&` / `||` are accepted as spellings of `&` / `|`.

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    loop {
        if input.peek(Token![||]) {
            input.parse::<Token![||]>()?;
        } else if input.peek(Token![|]) {
            input.parse::<Token![|]>()?;
        } else {
            break;
        }
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    loop {
        if input.peek(Token![&&]) {
            input.parse::<Token![&&]>()?;
        } else if input.peek(Token![&]) {
            input.parse::<Token![&]>()?;
        } else {
            break;
        }
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        parse_operand(input).map(BoolExpr::Pred)
    }
}

/// Operand: `path`, `path(args..)` or `name!(..)`, optionally followed by
/// `.method(args..)` / `.method::<T>(args..)` calls,
/// e.g. `within(0, 9)`, `all![a, b]` or `p.widen::<E>()`.
fn parse_operand(input: ParseStream) -> syn::Result<TokenStream> {
    let mut tokens = TokenStream::new();

    input.parse::<ExprPath>()?.to_tokens(&mut tokens);
    if input.peek(Token![!]) {
        // `!` never follows an operand, so this is a macro call
        input.parse::<Token![!]>()?.to_tokens(&mut tokens);
        let group: proc_macro2::Group = input.parse()?;
        group.to_tokens(&mut tokens);
    } else {
        parse_call_args(input, &mut tokens)?;
    }

    while input.peek(Token![.]) {
        input.parse::<Token![.]>()?.to_tokens(&mut tokens);
        input.parse::<Ident>()?.to_tokens(&mut tokens);
        if input.peek(Token![::]) {
            input.parse::<Token![::]>()?.to_tokens(&mut tokens);
            input.parse::<AngleBracketedGenericArguments>()?.to_tokens(&mut tokens);
        }
        parse_call_args(input, &mut tokens)?;
    }
    Ok(tokens)
}

fn parse_call_args(input: ParseStream, tokens: &mut TokenStream) -> syn::Result<()> {
    if input.peek(syn::token::Paren) {
        let group: proc_macro2::Group = input.parse()?;
        group.to_tokens(tokens);
    }
    Ok(())
}

// =============================================================================
// BoolExpr Utilities
// =============================================================================

/// Convert BoolExpr to the equivalent combinator chain.
///
/// Operands are evaluated left to right, so the expansion keeps the
/// short-circuit order of the written expression.
pub fn bool_expr_to_predicate(expr: &BoolExpr) -> TokenStream {
    match expr {
        BoolExpr::Pred(tokens) => tokens.clone(),
        BoolExpr::And(lhs, rhs) => {
            let l = bool_expr_to_predicate(lhs);
            let r = bool_expr_to_predicate(rhs);
            quote! { ::tola_bipred::BiPredicate::and(#l, #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = bool_expr_to_predicate(lhs);
            let r = bool_expr_to_predicate(rhs);
            quote! { ::tola_bipred::BiPredicate::or(#l, #r) }
        }
        BoolExpr::Not(operand) => {
            let o = bool_expr_to_predicate(operand);
            quote! { ::tola_bipred::BiPredicate::negate(#o) }
        }
    }
}
