//! Direct field writes.

use crate::{Reflect, ReflectionResult, Value};

use super::{InjectionStrategy, unsupported};

/// Writes the field named exactly like the property, whatever its
/// visibility. Last resort in the default list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectionStrategy;

impl InjectionStrategy for ReflectionStrategy {
    fn name(&self) -> &'static str {
        "reflection"
    }

    fn supports(&self, object: &dyn Reflect, property: &str, _value: &Value) -> bool {
        object.field(property).is_some()
    }

    fn inject(
        &self,
        object: &mut dyn Reflect,
        property: &str,
        value: &Value,
    ) -> ReflectionResult<()> {
        if !self.supports(&*object, property, value) {
            return Err(unsupported(self.name(), property));
        }
        object.write_field(property, value)
    }
}
