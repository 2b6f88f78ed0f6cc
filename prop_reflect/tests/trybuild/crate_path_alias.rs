use prop_reflect::{Reflect, ReflectionObject, reflect_methods};

/// Verifies that `crate = "prop_reflect"` is accepted by both macros. Uses
/// the real crate name as a self-referential alias so no workspace
/// reconfiguration is needed.
#[derive(Debug, Default, Reflect)]
#[reflect(methods, crate = "prop_reflect")]
struct CratePathTarget {
    value: String,
    count: u32,
}

#[reflect_methods(crate = "prop_reflect")]
impl CratePathTarget {
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }
}

fn main() {
    let result = ReflectionObject::from_value(CratePathTarget::default())
        .with_property("value", "hello")
        .with_property("count", 1_u32)
        .build_object();
    let _: prop_reflect::ReflectionResult<prop_reflect::Shared<CratePathTarget>> = result;
}
