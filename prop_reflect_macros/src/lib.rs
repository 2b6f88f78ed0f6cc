//! Procedural macros for `prop_reflect`.
//!
//! * `#[derive(Reflect)]` describes the named fields of a struct and
//!   implements `prop_reflect::Reflect` for it.
//! * `#[reflect_methods]` on an inherent `impl` block registers its public
//!   methods under lower-camel names (`set_title` becomes `setTitle`) and
//!   turns an associated function marked `#[reflect(constructor)]` into the
//!   type's `prop_reflect::Construct` implementation.
//!
//! Both macros accept `crate = "path"` for crates that rename the
//! `prop_reflect` dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

mod attrs;
mod derive;
mod methods;
mod type_utils;

/// Derive macro for `prop_reflect::Reflect`.
///
/// Struct attributes:
///
/// * `#[reflect(methods)]` forwards method lookups to the table generated by
///   `#[reflect_methods]`.
/// * `#[reflect(construct = "default")]` implements `Construct` through
///   `Default`.
/// * `#[reflect(crate = "path")]` overrides the runtime crate path.
///
/// Field attributes are `#[reflect(skip)]` and `#[reflect(rename = "...")]`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Registers the methods of an inherent `impl` block for reflection.
///
/// Public methods taking `&self` or `&mut self` are registered unless they
/// are generic, take `impl Trait` or `&mut` arguments, or carry
/// `#[reflect(skip)]`. `#[reflect(rename = "...")]` overrides the registered
/// name; two methods resolving to the same name are rejected.
///
/// A method returning `Result<T, E>` yields `T` and turns `Err` into
/// `ReflectionError::MethodFailed`, so `E` must implement `Display`. The same
/// applies to a constructor returning `Result<Self, E>`. A returned `&Self` or
/// `&mut Self`, as from chaining setters, is discarded.
///
/// Only one `#[reflect_methods]` block is allowed per type, since each block
/// implements `ReflectMethods`. A second block fails with a conflicting
/// implementation error; move its methods into the first block instead.
#[proc_macro_attribute]
pub fn reflect_methods(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as methods::BlockArgs);
    let block = parse_macro_input!(item as ItemImpl);
    methods::expand(&args, block)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests;
