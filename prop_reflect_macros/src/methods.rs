//! Token generation for `#[reflect_methods]`.
//!
//! Every `pub fn` with a `&self` or `&mut self` receiver becomes callable
//! through `Reflect::call_mut` (and `Reflect::call` for `&self`), registered
//! under its lower-camel name. An associated function marked
//! `#[reflect(constructor)]` becomes the type's `Construct` implementation.
//! `Result` returns are unwrapped and their errors reported as
//! `ReflectionError::MethodFailed`.

use heck::ToLowerCamelCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, Pat, ReturnType, Signature, Type};

use crate::attrs::{parse_crate_path, parse_method_attrs, runtime_path, strip_reflect};
use crate::type_utils::{is_self_type, is_str, option_inner, result_ok};

/// Options passed as `#[reflect_methods(...)]` arguments.
#[derive(Default)]
pub(crate) struct BlockArgs {
    pub crate_path: Option<syn::Path>,
}

impl syn::parse::Parse for BlockArgs {
    fn parse(input: syn::parse::ParseStream<'_>) -> syn::Result<Self> {
        let mut out = Self::default();
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("crate") {
                out.crate_path = Some(parse_crate_path(&meta)?);
                Ok(())
            } else {
                Err(meta.error("unrecognised reflect_methods argument"))
            }
        });
        syn::parse::Parser::parse2(parser, input.parse()?)?;
        Ok(out)
    }
}

/// How a parameter is produced from a `Value`.
enum ArgKind {
    Owned(Type),
    Borrowed(Type),
    BorrowedStr,
}

struct Param {
    name: String,
    kind: ArgKind,
}

/// A method that takes part in reflection.
struct ReflectedMethod {
    ident: syn::Ident,
    name: String,
    shared: bool,
    params: Vec<Param>,
    returns: Returns,
    fallible: bool,
}

/// How a method's output becomes a `Value`. A `Result` is unwrapped first.
enum Returns {
    Unit,
    Owned,
    Borrowed,
}

/// A constructor registered with `#[reflect(constructor)]`.
struct Constructor {
    ident: syn::Ident,
    params: Vec<(String, Type)>,
    fallible: bool,
}

/// Expands an `impl` block, returning it unchanged apart from stripped
/// helper attributes, followed by the generated trait implementations.
pub(crate) fn expand(args: &BlockArgs, mut block: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &block.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "reflect_methods applies to inherent impl blocks only",
        ));
    }
    let krate = runtime_path(args.crate_path.as_ref());
    let mut methods: Vec<ReflectedMethod> = Vec::new();
    let mut constructor: Option<Constructor> = None;

    for item in &mut block.items {
        let ImplItem::Fn(func) = item else {
            continue;
        };
        let attrs = parse_method_attrs(&func.attrs)?;
        strip_reflect(&mut func.attrs);
        if attrs.constructor {
            if constructor.is_some() {
                return Err(syn::Error::new_spanned(
                    &func.sig.ident,
                    "only one constructor can be registered",
                ));
            }
            constructor = Some(parse_constructor(func)?);
            continue;
        }
        if attrs.skip || !matches!(func.vis, syn::Visibility::Public(_)) {
            continue;
        }
        if let Some(mut method) = parse_method(func, &block.self_ty)? {
            if let Some(rename) = attrs.rename {
                method.name = rename;
            }
            if methods.iter().any(|known| known.name == method.name) {
                return Err(syn::Error::new_spanned(
                    &func.sig.ident,
                    format!("method name `{}` is already registered", method.name),
                ));
            }
            methods.push(method);
        }
    }

    let methods_tokens = methods_impl(&block, &methods, &krate);
    let construct_tokens = constructor.map(|ctor| construct_impl(&block, &ctor, &krate));
    Ok(quote! {
        #block
        #methods_tokens
        #construct_tokens
    })
}

fn receiver_kind(sig: &Signature) -> Option<bool> {
    let receiver = sig.receiver()?;
    if receiver.reference.is_none() || receiver.colon_token.is_some() {
        return None;
    }
    Some(receiver.mutability.is_none())
}

fn param_name(pat: &Pat, index: usize) -> String {
    match pat {
        Pat::Ident(pat_ident) => pat_ident.ident.unraw().to_string(),
        _ => format!("arg{index}"),
    }
}

/// Describes `func` or returns `None` when it cannot be called reflectively
/// (by-value receiver, generic parameters, `impl Trait` or `&mut` arguments).
fn parse_method(func: &ImplItemFn, self_ty: &Type) -> syn::Result<Option<ReflectedMethod>> {
    let sig = &func.sig;
    let Some(shared) = receiver_kind(sig) else {
        return Ok(None);
    };
    let generic = sig
        .generics
        .params
        .iter()
        .any(|param| !matches!(param, syn::GenericParam::Lifetime(_)));
    if generic || sig.asyncness.is_some() {
        return Ok(None);
    }
    let mut params = Vec::new();
    for (index, arg) in sig.inputs.iter().skip(1).enumerate() {
        let FnArg::Typed(typed) = arg else {
            return Ok(None);
        };
        let kind = match &*typed.ty {
            Type::Reference(reference) if reference.mutability.is_none() => {
                if is_str(&reference.elem) {
                    ArgKind::BorrowedStr
                } else {
                    ArgKind::Borrowed((*reference.elem).clone())
                }
            }
            Type::Reference(_) | Type::ImplTrait(_) => return Ok(None),
            other => ArgKind::Owned(other.clone()),
        };
        params.push(Param {
            name: param_name(&typed.pat, index),
            kind,
        });
    }
    let (returns, fallible) = match &sig.output {
        ReturnType::Default => (Some(Returns::Unit), false),
        ReturnType::Type(_, ty) => match result_ok(ty) {
            Some(ok) => (output_kind(ok, self_ty), true),
            None => (output_kind(ty, self_ty), false),
        },
    };
    let Some(returns) = returns else {
        return Ok(None);
    };
    Ok(Some(ReflectedMethod {
        ident: sig.ident.clone(),
        name: sig.ident.unraw().to_string().to_lower_camel_case(),
        shared,
        params,
        returns,
        fallible,
    }))
}

/// Classifies a return type. A reference to the receiver's own type, as
/// returned by chaining setters, is discarded rather than cloned.
fn output_kind(ty: &Type, self_ty: &Type) -> Option<Returns> {
    match ty {
        Type::ImplTrait(_) => None,
        Type::Reference(reference) if is_self_type(&reference.elem, self_ty) => {
            Some(Returns::Unit)
        }
        Type::Reference(_) => Some(Returns::Borrowed),
        Type::Tuple(tuple) if tuple.elems.is_empty() => Some(Returns::Unit),
        _ => Some(Returns::Owned),
    }
}

fn parse_constructor(func: &ImplItemFn) -> syn::Result<Constructor> {
    let sig = &func.sig;
    if sig.receiver().is_some() {
        return Err(syn::Error::new_spanned(sig, "a constructor cannot take self"));
    }
    let mut params = Vec::new();
    for (index, arg) in sig.inputs.iter().enumerate() {
        let FnArg::Typed(typed) = arg else {
            continue;
        };
        if matches!(&*typed.ty, Type::Reference(_) | Type::ImplTrait(_)) {
            return Err(syn::Error::new_spanned(
                &typed.ty,
                "constructor parameters must be owned types",
            ));
        }
        params.push((param_name(&typed.pat, index), (*typed.ty).clone()));
    }
    let fallible = matches!(&sig.output, ReturnType::Type(_, ty) if result_ok(ty).is_some());
    Ok(Constructor {
        ident: sig.ident.clone(),
        params,
        fallible,
    })
}

fn call_tokens(method: &ReflectedMethod, krate: &syn::Path) -> TokenStream {
    let ident = &method.ident;
    let name = &method.name;
    let arity = method.params.len();
    let bindings: Vec<_> = (0..arity).map(|i| format_ident!("__arg{i}")).collect();
    let converted = method.params.iter().zip(&bindings).map(|(param, binding)| {
        let member = &param.name;
        match &param.kind {
            ArgKind::Owned(ty) => {
                quote! { #krate::reflect::support::take::<#ty>(#member, #binding)? }
            }
            ArgKind::Borrowed(ty) => {
                quote! { #krate::reflect::support::borrow::<#ty>(#member, #binding)? }
            }
            ArgKind::BorrowedStr => {
                quote! { #krate::reflect::support::borrow_str(#member, #binding)? }
            }
        }
    });
    let invoke = quote! { self.#ident(#(#converted),*) };
    let result = if method.fallible {
        let success = match method.returns {
            Returns::Unit => quote! {
                ::core::result::Result::Ok(_) => {
                    ::core::result::Result::Ok(#krate::Value::new(()))
                }
            },
            Returns::Owned => quote! {
                ::core::result::Result::Ok(__out) => {
                    ::core::result::Result::Ok(#krate::Value::new(__out))
                }
            },
            Returns::Borrowed => quote! {
                ::core::result::Result::Ok(__out) => ::core::result::Result::Ok(
                    #krate::Value::new(::std::borrow::ToOwned::to_owned(&*__out)),
                )
            },
        };
        quote! {
            match #invoke {
                #success,
                ::core::result::Result::Err(__err) => ::core::result::Result::Err(
                    #krate::reflect::support::method_failed(name, &__err),
                ),
            }
        }
    } else {
        match method.returns {
            Returns::Unit => quote! {
                #invoke;
                ::core::result::Result::Ok(#krate::Value::new(()))
            },
            Returns::Owned => quote! {
                ::core::result::Result::Ok(#krate::Value::new(#invoke))
            },
            Returns::Borrowed => quote! {
                ::core::result::Result::Ok(#krate::Value::new(
                    ::std::borrow::ToOwned::to_owned(&*#invoke),
                ))
            },
        }
    };
    quote! {
        #name => {
            let [#(#bindings),*] = args else {
                return ::core::result::Result::Err(
                    #krate::reflect::support::arity_mismatch(name, #arity, args.len()),
                );
            };
            #result
        }
    }
}

fn methods_impl(
    block: &ItemImpl,
    methods: &[ReflectedMethod],
    krate: &syn::Path,
) -> TokenStream {
    let self_ty = &block.self_ty;
    let (impl_generics, _, where_clause) = block.generics.split_for_impl();
    let infos = methods.iter().map(|method| {
        let name = &method.name;
        let arity = method.params.len();
        let receiver = if method.shared {
            quote! { #krate::Receiver::Shared }
        } else {
            quote! { #krate::Receiver::Exclusive }
        };
        quote! {
            #krate::MethodInfo {
                name: #name,
                arity: #arity,
                receiver: #receiver,
            }
        }
    });
    let shared_arms = methods
        .iter()
        .filter(|method| method.shared)
        .map(|method| call_tokens(method, krate));
    let all_arms = methods.iter().map(|method| call_tokens(method, krate));
    let unknown = quote! {
        _ => ::core::result::Result::Err(#krate::ReflectionError::unknown_member(
            ::core::any::type_name::<Self>(),
            name,
        )),
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::ReflectMethods for #self_ty #where_clause {
            const METHODS: &'static [#krate::MethodInfo] = &[#(#infos),*];

            fn call_method(
                &self,
                name: &str,
                args: &[#krate::Value],
            ) -> #krate::ReflectionResult<#krate::Value> {
                let _ = args;
                match name {
                    #(#shared_arms)*
                    #unknown
                }
            }

            fn call_method_mut(
                &mut self,
                name: &str,
                args: &[#krate::Value],
            ) -> #krate::ReflectionResult<#krate::Value> {
                let _ = args;
                match name {
                    #(#all_arms)*
                    #unknown
                }
            }
        }
    }
}

fn construct_impl(block: &ItemImpl, ctor: &Constructor, krate: &syn::Path) -> TokenStream {
    let self_ty = &block.self_ty;
    let (impl_generics, _, where_clause) = block.generics.split_for_impl();
    let ident = &ctor.ident;
    let ctor_name = ident.unraw().to_string();
    let names = ctor.params.iter().map(|(name, _)| name);
    let arguments = ctor.params.iter().map(|(name, ty)| match option_inner(ty) {
        Some(inner) => quote! { arguments.get_optional::<#inner>(#name)? },
        None => quote! { arguments.get::<#ty>(#name)? },
    });
    let invoke = quote! { Self::#ident(#(#arguments),*) };
    let body = if ctor.fallible {
        quote! {
            #invoke.map_err(|__err| {
                #krate::reflect::support::method_failed(#ctor_name, &__err)
            })
        }
    } else {
        quote! { ::core::result::Result::Ok(#invoke) }
    };
    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Construct for #self_ty #where_clause {
            const PARAMETERS: &'static [&'static str] = &[#(#names),*];

            fn construct(
                arguments: &#krate::Arguments<'_>,
            ) -> #krate::ReflectionResult<Self> {
                let _ = arguments;
                #body
            }
        }
    }
}
