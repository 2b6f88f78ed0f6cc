//! trybuild coverage for `crate = "..."` support in both macros.
//!
//! Ensures generated code compiles when the runtime crate is reached through
//! a path other than `prop_reflect`.

#[test]
fn crate_path_alias_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
    t.pass("tests/trybuild/crate_path_alias_renamed.rs");
}
