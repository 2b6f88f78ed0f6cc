//! Token generation for `#[derive(Reflect)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Type, WherePredicate, parse_quote};

use crate::attrs::{StructAttrs, parse_field_attrs, parse_struct_attrs, runtime_path};
use crate::type_utils::display_name;

/// A field that takes part in reflection.
pub(crate) struct ReflectedField {
    pub ident: syn::Ident,
    pub name: String,
    pub ty: Type,
    pub public: bool,
}

/// Collects reflected fields from a named-field struct.
pub(crate) fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<ReflectedField>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "Reflect requires named fields",
        ));
    };
    let mut out = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let name = attrs
            .rename
            .unwrap_or_else(|| syn::ext::IdentExt::unraw(&ident).to_string());
        out.push(ReflectedField {
            ident,
            name,
            ty: field.ty.clone(),
            public: matches!(field.vis, syn::Visibility::Public(_)),
        });
    }
    Ok(out)
}

/// Expands the derive input into the `Reflect` (and optionally `Construct`)
/// implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let fields = collect_fields(input)?;
    let krate = runtime_path(attrs.crate_path.as_ref());
    let reflect_tokens = reflect_impl(input, &attrs, &fields, &krate);
    let construct_tokens = attrs
        .construct_default
        .then(|| default_construct_impl(input, &fields, &krate));
    Ok(quote! {
        #reflect_tokens
        #construct_tokens
    })
}

fn bounded_generics(input: &DeriveInput, fields: &[ReflectedField]) -> syn::Generics {
    let mut generics = input.generics.clone();
    if generics.params.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for field in fields {
        let ty = &field.ty;
        let predicate: WherePredicate = parse_quote! {
            #ty: ::core::clone::Clone + ::core::marker::Send + ::core::marker::Sync + 'static
        };
        where_clause.predicates.push(predicate);
    }
    let ident = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();
    where_clause
        .predicates
        .push(parse_quote! { #ident #ty_generics: ::core::marker::Send + 'static });
    generics
}

fn reflect_impl(
    input: &DeriveInput,
    attrs: &StructAttrs,
    fields: &[ReflectedField],
    krate: &syn::Path,
) -> TokenStream {
    let ident = &input.ident;
    let generics = bounded_generics(input, fields);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_infos = fields.iter().map(|field| {
        let name = &field.name;
        let type_name = display_name(&field.ty);
        let visibility = if field.public {
            quote! { #krate::Visibility::Public }
        } else {
            quote! { #krate::Visibility::Private }
        };
        quote! {
            #krate::FieldInfo {
                name: #name,
                visibility: #visibility,
                type_name: #type_name,
            }
        }
    });
    let read_arms = fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        quote! {
            #name => ::core::option::Option::Some(#krate::Value::new(
                ::core::clone::Clone::clone(&self.#member),
            )),
        }
    });
    let write_arms = fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        let ty = &field.ty;
        quote! {
            #name => {
                self.#member = #krate::reflect::support::take::<#ty>(name, value)?;
                ::core::result::Result::Ok(())
            }
        }
    });
    let (methods, call, call_mut) = if attrs.methods {
        (
            quote! { <Self as #krate::ReflectMethods>::METHODS },
            quote! { <Self as #krate::ReflectMethods>::call_method(self, name, args) },
            quote! { <Self as #krate::ReflectMethods>::call_method_mut(self, name, args) },
        )
    } else {
        let missing = quote! {
            {
                let _ = args;
                ::core::result::Result::Err(#krate::ReflectionError::unknown_member(
                    ::core::any::type_name::<Self>(),
                    name,
                ))
            }
        };
        (quote! { &[] }, missing.clone(), missing)
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }

            fn fields(&self) -> &'static [#krate::FieldInfo] {
                &[#(#field_infos),*]
            }

            fn methods(&self) -> &'static [#krate::MethodInfo] {
                #methods
            }

            fn read_field(&self, name: &str) -> ::core::option::Option<#krate::Value> {
                match name {
                    #(#read_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn write_field(
                &mut self,
                name: &str,
                value: &#krate::Value,
            ) -> #krate::ReflectionResult<()> {
                match name {
                    #(#write_arms)*
                    _ => {
                        let _ = value;
                        ::core::result::Result::Err(#krate::ReflectionError::unknown_member(
                            ::core::any::type_name::<Self>(),
                            name,
                        ))
                    }
                }
            }

            fn call(
                &self,
                name: &str,
                args: &[#krate::Value],
            ) -> #krate::ReflectionResult<#krate::Value> {
                #call
            }

            fn call_mut(
                &mut self,
                name: &str,
                args: &[#krate::Value],
            ) -> #krate::ReflectionResult<#krate::Value> {
                #call_mut
            }
        }
    }
}

fn default_construct_impl(
    input: &DeriveInput,
    fields: &[ReflectedField],
    krate: &syn::Path,
) -> TokenStream {
    let ident = &input.ident;
    let mut generics = bounded_generics(input, fields);
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote! { Self: ::core::default::Default });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Construct for #ident #ty_generics #where_clause {
            const PARAMETERS: &'static [&'static str] = &[];

            fn construct(
                _arguments: &#krate::Arguments<'_>,
            ) -> #krate::ReflectionResult<Self> {
                ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
            }
        }
    }
}
