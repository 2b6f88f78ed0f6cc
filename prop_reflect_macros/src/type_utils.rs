//! Type introspection helpers.
//!
//! Shallow inspection of `syn::Type` values: recognising `Option<T>`,
//! borrowed parameters and rendering readable type names.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

/// Returns the inner type if `ty` is `Option<T>`.
///
/// Only the outermost path is inspected, so `std::option::Option<T>` matches
/// while `Option<Option<T>>` yields `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(angle_args) = &last.arguments else {
        return None;
    };
    let GenericArgument::Type(inner) = angle_args.args.first()? else {
        return None;
    };
    Some(inner)
}

/// Returns the success type if `ty` is a `Result<T, E>` or a single-argument
/// alias such as `io::Result<T>`.
pub(crate) fn result_ok(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(angle_args) = &last.arguments else {
        return None;
    };
    let GenericArgument::Type(ok) = angle_args.args.first()? else {
        return None;
    };
    Some(ok)
}

/// Returns `true` if `ty` is `Self` or spells out `self_ty`.
pub(crate) fn is_self_type(ty: &Type, self_ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("Self"))
        || display_name(ty) == display_name(self_ty)
}

/// Returns `true` if `ty` is the bare `str` type.
pub(crate) fn is_str(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("str"))
}

/// Renders `ty` without the spacing `TokenStream` inserts between tokens.
pub(crate) fn display_name(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != ' ' {
            out.push(ch);
            continue;
        }
        let prev = out.chars().last();
        let next = chars.peek().copied();
        let glue = matches!(prev, Some('<' | ':' | '&' | '('))
            || matches!(next, Some('<' | '>' | ':' | ',' | ')'));
        if !glue {
            out.push(' ');
        }
    }
    out
}
