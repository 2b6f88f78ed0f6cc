//! Injection through a method named like the property.

use crate::naming::to_accessor_name;
use crate::{Reflect, ReflectionResult, Value};

use super::{InjectionStrategy, unsupported};

/// Calls the method named exactly like the property, e.g. `d(value)` for
/// the property `d`. A method taking no arguments does not qualify.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedMethodStrategy;

impl InjectionStrategy for NamedMethodStrategy {
    fn name(&self) -> &'static str {
        "named_method"
    }

    fn supports(&self, object: &dyn Reflect, property: &str, _value: &Value) -> bool {
        object
            .method(&to_accessor_name(property))
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
        object.call_mut(&to_accessor_name(property), std::slice::from_ref(value))?;
        Ok(())
    }
}
