//! Parsing of `#[reflect(...)]` attributes.
//!
//! Unlike a forwards-compatible configuration surface, every key here
//! changes what gets generated, so unknown keys are compile errors.

use syn::{Attribute, Lit, LitStr, meta::ParseNestedMeta, parse_quote};

/// Struct-level options for `#[derive(Reflect)]`.
#[derive(Default)]
pub(crate) struct StructAttrs {
    pub methods: bool,
    pub construct_default: bool,
    pub crate_path: Option<syn::Path>,
}

/// Field-level options for `#[derive(Reflect)]`.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub rename: Option<String>,
}

/// Method-level options inside a `#[reflect_methods]` block.
#[derive(Default)]
pub(crate) struct MethodAttrs {
    pub skip: bool,
    pub rename: Option<String>,
    pub constructor: bool,
}

/// Iterate all `#[reflect(...)]` attributes once and apply a callback.
fn parse_reflect<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let lit = meta.value()?.parse::<Lit>()?;
    match lit {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

fn unknown(meta: &ParseNestedMeta) -> syn::Error {
    meta.error("unrecognised reflect attribute")
}

/// Path under which generated code reaches the runtime crate: the
/// `crate = "..."` override when present, `prop_reflect` otherwise.
pub(crate) fn runtime_path(custom: Option<&syn::Path>) -> syn::Path {
    custom.cloned().unwrap_or_else(|| parse_quote!(prop_reflect))
}

/// Parses the `crate = "..."` key shared by both macros.
pub(crate) fn parse_crate_path(meta: &ParseNestedMeta) -> syn::Result<syn::Path> {
    lit_str(meta, "crate")?.parse()
}

/// Extracts `#[reflect(...)]` metadata applied to a struct.
///
/// Recognised keys are `methods`, `construct = "default"` and
/// `crate = "path"`.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_reflect(attrs, |meta| {
        if meta.path.is_ident("methods") {
            out.methods = true;
        } else if meta.path.is_ident("construct") {
            let s = lit_str(meta, "construct")?;
            if s.value() != "default" {
                return Err(syn::Error::new(
                    s.span(),
                    "construct only supports \"default\"",
                ));
            }
            out.construct_default = true;
        } else if meta.path.is_ident("crate") {
            out.crate_path = Some(parse_crate_path(meta)?);
        } else {
            return Err(unknown(meta));
        }
        Ok(())
    })?;
    Ok(out)
}

/// Extracts `#[reflect(skip)]` and `#[reflect(rename = "...")]` from a
/// field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_reflect(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
        } else if meta.path.is_ident("rename") {
            out.rename = Some(lit_str(meta, "rename")?.value());
        } else {
            return Err(unknown(meta));
        }
        Ok(())
    })?;
    Ok(out)
}

/// Extracts `skip`, `rename = "..."` and `constructor` from a method.
pub(crate) fn parse_method_attrs(attrs: &[Attribute]) -> syn::Result<MethodAttrs> {
    let mut out = MethodAttrs::default();
    parse_reflect(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
        } else if meta.path.is_ident("rename") {
            out.rename = Some(lit_str(meta, "rename")?.value());
        } else if meta.path.is_ident("constructor") {
            out.constructor = true;
        } else {
            return Err(unknown(meta));
        }
        Ok(())
    })?;
    Ok(out)
}

/// Removes `#[reflect(...)]` helper attributes, which are only meaningful to
/// the macros and would otherwise reach the compiler.
pub(crate) fn strip_reflect(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident("reflect"));
}
