//! Injection through `set<Property>` methods.

use crate::naming::to_setter_name;
use crate::{Reflect, ReflectionResult, Value};

use super::{InjectionStrategy, unsupported};

/// Calls `set<Property>(value)`; the property `foo_bar` uses `setFooBar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetterStrategy;

impl InjectionStrategy for SetterStrategy {
    fn name(&self) -> &'static str {
        "setter"
    }

    fn supports(&self, object: &dyn Reflect, property: &str, _value: &Value) -> bool {
        object
            .method(&to_setter_name(property))
            .is_some_and(|method| method.arity == 1)
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
        object.call_mut(&to_setter_name(property), std::slice::from_ref(value))?;
        Ok(())
    }
}
