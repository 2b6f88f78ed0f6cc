//! Unit tests for the procedural macro token generators.

use crate::derive;
use crate::methods::{self, BlockArgs};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, ItemImpl, parse_quote};

fn normalise(tokens: &proc_macro2::TokenStream) -> String {
    tokens.to_string().split_whitespace().collect()
}

fn expand_derive(input: &DeriveInput) -> Result<String> {
    Ok(normalise(&derive::expand(input)?))
}

fn expand_methods(args: &BlockArgs, block: ItemImpl) -> Result<String> {
    Ok(normalise(&methods::expand(args, block)?))
}

fn contains_all(haystack: &str, needles: &[&str]) -> Result<()> {
    for raw in needles {
        let needle: String = raw.split_whitespace().collect();
        ensure!(
            haystack.contains(&needle),
            "expected `{needle}` in generated tokens: {haystack}"
        );
    }
    Ok(())
}

#[rstest]
fn derive_describes_fields_in_declaration_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Sample {
            pub a: i32,
            b: Option<String>,
        }
    };
    let out = expand_derive(&input)?;
    contains_all(
        &out,
        &[
            "impl prop_reflect::Reflect for Sample",
            r#"name: "a", visibility: prop_reflect::Visibility::Public, type_name: "i32""#,
            r#"name: "b", visibility: prop_reflect::Visibility::Private, type_name: "Option<String>""#,
            r#""b" => { self.b = prop_reflect::reflect::support::take::<Option<String>>(name, value)?;"#,
        ],
    )?;
    let a = out.find(r#"name:"a""#).ok_or_else(|| anyhow!("a missing"))?;
    let b = out.find(r#"name:"b""#).ok_or_else(|| anyhow!("b missing"))?;
    ensure!(a < b, "fields out of order");
    ensure!(!out.contains("Construct"), "no constructor was requested");
    Ok(())
}

#[rstest]
fn derive_honours_skip_and_rename() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Sample {
            #[reflect(skip)]
            cache: Vec<u8>,
            #[reflect(rename = "kind")]
            r#type: String,
        }
    };
    let out = expand_derive(&input)?;
    ensure!(!out.contains("cache"), "skipped field leaked: {out}");
    contains_all(&out, &[r#""kind" => { self.r#type ="#])
}

#[rstest]
fn derive_forwards_to_method_table_when_requested() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[reflect(methods, construct = "default", crate = "alias")]
        struct Sample {
            a: i32,
        }
    };
    let out = expand_derive(&input)?;
    contains_all(
        &out,
        &[
            "<Self as alias::ReflectMethods>::METHODS",
            "<Self as alias::ReflectMethods>::call_method_mut(self, name, args)",
            "impl alias::Construct for Sample where Self: ::core::default::Default",
            "const PARAMETERS: &'static [&'static str] = &[];",
        ],
    )
}

#[rstest]
fn derive_bounds_generic_field_types() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Wrapper<T> {
            inner: T,
        }
    };
    let out = expand_derive(&input)?;
    contains_all(
        &out,
        &[
            "impl<T> prop_reflect::Reflect for Wrapper<T> where T: ::core::clone::Clone",
            "Wrapper<T>: ::core::marker::Send + 'static",
        ],
    )
}

#[rstest]
#[case::enumeration(parse_quote! { enum Choice { A, B } }, "Reflect can only be derived for structs")]
#[case::tuple(parse_quote! { struct Pair(i32, i32); }, "Reflect requires named fields")]
fn derive_rejects_unsupported_shapes(#[case] input: DeriveInput, #[case] message: &str) {
    let err = derive::expand(&input).err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some(message));
}

#[rstest]
fn methods_register_public_borrowing_methods() -> Result<()> {
    let block: ItemImpl = parse_quote! {
        impl Sample {
            pub fn set_c(&mut self, value: i32) {}
            pub fn get_b(&self) -> i32 { 0 }
            pub fn label(&self, prefix: &str) -> &str { "" }
            fn hidden(&self) {}
            pub fn consume(self) {}
            pub fn generic<T>(&self, value: T) {}
            #[reflect(skip)]
            pub fn skipped(&self) {}
            #[reflect(rename = "d")]
            pub fn store_d(&mut self, value: Vec<u8>) {}
        }
    };
    let out = expand_methods(&BlockArgs::default(), block)?;
    contains_all(
        &out,
        &[
            r#"name: "setC", arity: 1usize, receiver: prop_reflect::Receiver::Exclusive"#,
            r#"name: "getB", arity: 0usize, receiver: prop_reflect::Receiver::Shared"#,
            r#"name: "label", arity: 1usize"#,
            r#"name: "d", arity: 1usize"#,
            "prop_reflect::reflect::support::borrow_str(\"prefix\", __arg0)?",
            "::std::borrow::ToOwned::to_owned(&*self.label(",
            "prop_reflect::reflect::support::arity_mismatch(name, 1usize, args.len())",
        ],
    )?;
    for absent in ["hidden", "consume", "generic", "skipped"] {
        let registered = format!("name:\"{absent}\"");
        ensure!(!out.contains(&registered), "{absent} should not be registered");
    }
    ensure!(!out.contains("#[reflect"), "helper attributes must be stripped");
    Ok(())
}

#[rstest]
fn shared_dispatch_only_reaches_shared_methods() -> Result<()> {
    let block: ItemImpl = parse_quote! {
        impl Sample {
            pub fn set_c(&mut self, value: i32) {}
        }
    };
    let out = expand_methods(&BlockArgs::default(), block)?;
    let shared = out
        .split("fncall_method_mut")
        .next()
        .ok_or_else(|| anyhow!("missing call_method"))?;
    ensure!(
        !shared.contains("self.set_c("),
        "&mut self method reachable through &self"
    );
    contains_all(&out, &["self.set_c(prop_reflect::reflect::support::take::<i32>"])
}

#[rstest]
fn fallible_methods_report_their_errors() -> Result<()> {
    let block: ItemImpl = parse_quote! {
        impl Person {
            pub fn set_age(&mut self, age: u32) -> Result<(), TooOld> { Ok(()) }
            pub fn parsed(&self) -> std::io::Result<u64> { Ok(0) }
        }
    };
    let out = expand_methods(&BlockArgs::default(), block)?;
    contains_all(
        &out,
        &[
            "match self.set_age(prop_reflect::reflect::support::take::<u32>(\"age\", __arg0)?)",
            "::core::result::Result::Ok(_) => { ::core::result::Result::Ok(prop_reflect::Value::new(())) }",
            "::core::result::Result::Ok(__out) => { ::core::result::Result::Ok(prop_reflect::Value::new(__out)) }",
            "prop_reflect::reflect::support::method_failed(name, &__err)",
        ],
    )?;
    ensure!(
        !out.contains("Value::new(self.set_age("),
        "a Result must not be stored as the call's value"
    );
    Ok(())
}

#[rstest]
fn chaining_setters_discard_the_returned_receiver() -> Result<()> {
    let block: ItemImpl = parse_quote! {
        impl Widget {
            pub fn set_width(&mut self, width: u32) -> &mut Self { self }
            pub fn set_height(&mut self, height: u32) -> &mut Widget { self }
        }
    };
    let out = expand_methods(&BlockArgs::default(), block)?;
    contains_all(
        &out,
        &[
            r#"name: "setWidth", arity: 1usize, receiver: prop_reflect::Receiver::Exclusive"#,
            r#"name: "setHeight", arity: 1usize"#,
            "self.set_width(prop_reflect::reflect::support::take::<u32>(\"width\", __arg0)?);",
            "self.set_height(prop_reflect::reflect::support::take::<u32>(\"height\", __arg0)?);",
        ],
    )?;
    ensure!(!out.contains("ToOwned"), "the receiver must not be cloned");
    Ok(())
}

#[rstest]
fn constructor_becomes_construct_impl() -> Result<()> {
    let block: ItemImpl = parse_quote! {
        impl Account {
            #[reflect(constructor)]
            pub fn new(owner: String, limit: Option<u32>) -> Self { todo!() }
        }
    };
    let out = expand_methods(&BlockArgs::default(), block)?;
    contains_all(
        &out,
        &[
            "impl prop_reflect::Construct for Account",
            r#"const PARAMETERS: &'static [&'static str] = &["owner", "limit"];"#,
            r#"Self::new(arguments.get::<String>("owner")?, arguments.get_optional::<u32>("limit")?)"#,
        ],
    )?;
    ensure!(!out.contains(r#"name:"new""#), "constructors are not methods");
    Ok(())
}

#[rstest]
fn fallible_constructor_maps_its_error() -> Result<()> {
    let block: ItemImpl = parse_quote! {
        impl Port {
            #[reflect(constructor)]
            pub fn new(number: u16) -> Result<Self, String> { todo!() }
        }
    };
    let out = expand_methods(&BlockArgs::default(), block)?;
    contains_all(
        &out,
        &[
            r#"Self::new(arguments.get::<u16>("number")?).map_err(|__err| {
                prop_reflect::reflect::support::method_failed("new", &__err)
            })"#,
        ],
    )?;
    ensure!(
        !out.contains("Ok(Self::new("),
        "a Result must not be wrapped in Ok"
    );
    Ok(())
}

#[rstest]
#[case::borrowed_param(
    parse_quote! { impl A { #[reflect(constructor)] pub fn new(name: &str) -> Self { todo!() } } },
    "constructor parameters must be owned types"
)]
#[case::two_constructors(
    parse_quote! {
        impl A {
            #[reflect(constructor)] pub fn new() -> Self { todo!() }
            #[reflect(constructor)] pub fn other() -> Self { todo!() }
        }
    },
    "only one constructor can be registered"
)]
#[case::duplicate_name(
    parse_quote! {
        impl A {
            pub fn set_c(&mut self, value: i32) {}
            #[reflect(rename = "setC")]
            pub fn store_c(&mut self, value: i32) {}
        }
    },
    "method name `setC` is already registered"
)]
#[case::trait_impl(
    parse_quote! { impl Clone for A { fn clone(&self) -> Self { todo!() } } },
    "reflect_methods applies to inherent impl blocks only"
)]
fn methods_reject_invalid_blocks(#[case] block: ItemImpl, #[case] message: &str) {
    let err = methods::expand(&BlockArgs::default(), block)
        .err()
        .map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some(message));
}

#[rstest]
fn block_args_accept_crate_alias() -> Result<()> {
    let args: BlockArgs = syn::parse_str(r#"crate = "alias""#)?;
    let block: ItemImpl = parse_quote! {
        impl Sample {
            pub fn get_b(&self) -> i32 { 0 }
        }
    };
    let out = expand_methods(&args, block)?;
    contains_all(&out, &["impl alias::ReflectMethods for Sample"])
}
