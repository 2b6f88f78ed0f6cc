//! Direct field reads.

use crate::{Reflect, ReflectionError, ReflectionResult, Value};

use super::{ExtractionStrategy, unsupported};

/// Reads the field named exactly like the property, whatever its
/// visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectionStrategy;

impl ExtractionStrategy for ReflectionStrategy {
    fn name(&self) -> &'static str {
        "reflection"
    }

    fn supports(&self, object: &dyn Reflect, property: &str) -> bool {
        object.field(property).is_some()
    }

    fn extract(&self, object: &dyn Reflect, property: &str) -> ReflectionResult<Value> {
        if !self.supports(object, property) {
            return Err(unsupported(self.name(), property));
        }
        object
            .read_field(property)
            .ok_or_else(|| ReflectionError::unknown_member(object.type_name(), property))
    }
}
