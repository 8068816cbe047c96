use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    FnArg, GenericArgument, Ident, ItemFn, PathArguments, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
};

use crate::common::to_upper_camel_case;

/// Arguments of `#[bi_predicate]`: empty, or `name = TypeName`.
#[derive(Default)]
pub struct BiPredicateArgs {
    pub name: Option<Ident>,
}

impl Parse for BiPredicateArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Self::default());
        }
        let key: Ident = input.parse()?;
        if key != "name" {
            return Err(syn::Error::new(key.span(), "expected `name = TypeName`"));
        }
        input.parse::<Token![=]>()?;
        let name: Ident = input.parse()?;
        input.parse::<Option<Token![,]>>()?;
        Ok(Self { name: Some(name) })
    }
}

/// How the function reports its result.
enum Output<'a> {
    /// `-> bool`
    Plain,
    /// `-> Result<bool, E>`
    Fallible(&'a Type),
}

/// `#[bi_predicate] fn left_is_zero(l: i64, r: i64) -> bool` keeps the function
/// and adds `struct LeftIsZero;` implementing `BiPredicate` by calling it.
pub fn expand_bi_predicate(args: BiPredicateArgs, func: ItemFn) -> TokenStream2 {
    match try_expand(args, &func) {
        Ok(tokens) => tokens,
        Err(err) => {
            let err = err.to_compile_error();
            quote! { #func #err }
        }
    }
}

fn try_expand(args: BiPredicateArgs, func: &ItemFn) -> syn::Result<TokenStream2> {
    let sig = &func.sig;

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&sig.generics, "bi_predicate functions cannot be generic"));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(asyncness, "bi_predicate functions cannot be async"));
    }
    if sig.inputs.len() != 2 {
        return Err(syn::Error::new_spanned(&sig.inputs, "bi_predicate functions take exactly two `i64` operands"));
    }
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new_spanned(receiver, "bi_predicate cannot be applied to methods"));
    }
    for input in &sig.inputs {
        if let FnArg::Typed(arg) = input {
            if !is_plain_ident(&arg.ty, "i64") {
                return Err(syn::Error::new_spanned(&arg.ty, "bi_predicate operands must be `i64`"));
            }
        }
    }

    let fn_ident = &sig.ident;
    let vis = &func.vis;
    let type_ident = match args.name {
        Some(name) => name,
        None => format_ident!("{}", to_upper_camel_case(&fn_ident.to_string()), span = fn_ident.span()),
    };

    let (error_ty, body) = match classify_output(&sig.output)? {
        Output::Plain => (
            quote! { ::core::convert::Infallible },
            quote! { ::core::result::Result::Ok(#fn_ident(left, right)) },
        ),
        Output::Fallible(err) => (quote! { #err }, quote! { #fn_ident(left, right) }),
    };

    let doc = format!("Predicate form of [`{fn_ident}`].");

    Ok(quote! {
        #func

        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #vis struct #type_ident;

        impl ::tola_bipred::BiPredicate for #type_ident {
            type Error = #error_ty;

            #[inline]
            fn evaluate(&self, left: i64, right: i64) -> ::core::result::Result<bool, Self::Error> {
                #body
            }
        }
    })
}

fn classify_output(output: &ReturnType) -> syn::Result<Output<'_>> {
    let ty = match output {
        ReturnType::Type(_, ty) => ty.as_ref(),
        ReturnType::Default => {
            return Err(syn::Error::new(Span::call_site(), "bi_predicate functions must return `bool` or `Result<bool, E>`"));
        }
    };

    if is_plain_ident(ty, "bool") {
        return Ok(Output::Plain);
    }
    if let Type::Path(path) = ty {
        if let Some(last) = path.path.segments.last() {
            if last.ident == "Result" {
                if let PathArguments::AngleBracketed(generics) = &last.arguments {
                    let mut types = generics.args.iter().filter_map(|arg| match arg {
                        GenericArgument::Type(ty) => Some(ty),
                        _ => None,
                    });
                    if let (Some(ok), Some(err), None) = (types.next(), types.next(), types.next()) {
                        if !is_plain_ident(ok, "bool") {
                            return Err(syn::Error::new_spanned(ok, "expected `Result<bool, E>`"));
                        }
                        return Ok(Output::Fallible(err));
                    }
                }
            }
        }
    }

    Err(syn::Error::new_spanned(ty, "expected `bool` or `Result<bool, E>`"))
}

/// `ty` is exactly the single-segment path `name` (e.g. `i64`, `bool`).
fn is_plain_ident(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident(name),
        Type::Group(group) => is_plain_ident(&group.elem, name),
        Type::Paren(paren) => is_plain_ident(&paren.elem, name),
        _ => false,
    }
}
