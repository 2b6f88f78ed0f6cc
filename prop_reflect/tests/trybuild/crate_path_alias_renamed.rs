//! Trybuild fixture verifying `crate = "..."` works with a genuine
//! dependency rename via `use ... as`.

use prop_reflect as my_refl;
use my_refl::{Reflect, ReflectionClass, reflect_methods};

/// Verifies that `crate = "my_refl"` generates code that references types
/// through the aliased name rather than `prop_reflect`.
#[derive(Debug, Reflect)]
#[reflect(methods, crate = "my_refl")]
struct AliasedTarget {
    name: String,
    size: Option<u64>,
}

#[reflect_methods(crate = "my_refl")]
impl AliasedTarget {
    #[reflect(constructor)]
    pub fn new(name: String) -> Self {
        Self { name, size: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn main() {
    let result = ReflectionClass::<AliasedTarget>::new()
        .with_property("name", "hello")
        .with_property("size", my_refl::Value::new(Some(3_u64)))
        .build_object();
    let _: my_refl::ReflectionResult<my_refl::Shared<AliasedTarget>> = result;
}
