//! Accessor naming conventions.
//!
//! Property names arrive in snake case (`foo_bar`) or camel case (`fooBar`);
//! accessors are registered and looked up in lower camel case. The derive
//! macros use the same conversion when they register methods, so the Rust
//! method `set_foo_bar` is found under `setFooBar`.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Converts a property name into its lower-camel accessor form.
///
/// # Examples
///
/// ```
/// use prop_reflect::naming::to_accessor_name;
///
/// assert_eq!(to_accessor_name("foo_bar"), "fooBar");
/// assert_eq!(to_accessor_name("fooBar"), "fooBar");
/// assert_eq!(to_accessor_name("Foo"), "foo");
/// ```
#[must_use]
pub fn to_accessor_name(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Name of the setter for `name` (`foo_bar` → `setFooBar`).
#[must_use]
pub fn to_setter_name(name: &str) -> String {
    prefixed("set", name)
}

/// Name of the getter for `name` (`foo_bar` → `getFooBar`).
#[must_use]
pub fn to_getter_name(name: &str) -> String {
    prefixed("get", name)
}

fn prefixed(prefix: &str, name: &str) -> String {
    let mut out = String::from(prefix);
    out.push_str(&name.to_upper_camel_case());
    out
}
