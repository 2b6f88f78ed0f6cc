//! Extraction through `get<Property>()` methods.

use crate::naming::to_getter_name;
use crate::{Reflect, ReflectionResult, Value};

use super::{ExtractionStrategy, readable_method, unsupported};

/// Calls `get<Property>()`; the property `foo_bar` uses `getFooBar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetterStrategy;

impl ExtractionStrategy for GetterStrategy {
    fn name(&self) -> &'static str {
        "getter"
    }

    fn supports(&self, object: &dyn Reflect, property: &str) -> bool {
        readable_method(object, &to_getter_name(property))
    }

    fn extract(&self, object: &dyn Reflect, property: &str) -> ReflectionResult<Value> {
        if !self.supports(object, property) {
            return Err(unsupported(self.name(), property));
        }
        object.call(&to_getter_name(property), &[])
    }
}
