//! Extraction through a method named like the property, or a public field.

use crate::naming::to_accessor_name;
use crate::reflect::Visibility;
use crate::{Reflect, ReflectionError, ReflectionResult, Value};

use super::{ExtractionStrategy, readable_method, unsupported};

/// Calls the zero-argument method named like the property, e.g. `c()` for
/// the property `c`; otherwise reads a `pub` field of that exact name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedMethodStrategy;

impl NamedMethodStrategy {
    fn has_public_field(object: &dyn Reflect, property: &str) -> bool {
        object
            .field(property)
            .is_some_and(|field| field.visibility == Visibility::Public)
    }
}

impl ExtractionStrategy for NamedMethodStrategy {
    fn name(&self) -> &'static str {
        "named_method"
    }

    fn supports(&self, object: &dyn Reflect, property: &str) -> bool {
        readable_method(object, &to_accessor_name(property))
            || Self::has_public_field(object, property)
    }

    fn extract(&self, object: &dyn Reflect, property: &str) -> ReflectionResult<Value> {
        let method = to_accessor_name(property);
        if readable_method(object, &method) {
            return object.call(&method, &[]);
        }
        if Self::has_public_field(object, property) {
            return object
                .read_field(property)
                .ok_or_else(|| ReflectionError::unknown_member(object.type_name(), property));
        }
        Err(unsupported(self.name(), property))
    }
}
