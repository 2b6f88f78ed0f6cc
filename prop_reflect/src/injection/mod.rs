//! Strategies that write a named value into an object.
//!
//! Strategies are queried in order; the first one whose
//! [`InjectionStrategy::supports`] answers `true` performs the write and the
//! rest are not consulted.

mod named_method;
mod reflection;
mod setter;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{Reflect, ReflectionError, ReflectionResult, Value};

pub use named_method::NamedMethodStrategy;
pub use reflection::ReflectionStrategy;
pub use setter::SetterStrategy;

/// A way of writing a property into an object.
pub trait InjectionStrategy: Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Returns `true` when this strategy can write `property` on `object`.
    fn supports(&self, object: &dyn Reflect, property: &str, value: &Value) -> bool;

    /// Writes `value` into `property`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::UnsupportedOperation`] when called although
    /// [`InjectionStrategy::supports`] is `false`, or whatever error the
    /// underlying member access reports.
    fn inject(
        &self,
        object: &mut dyn Reflect,
        property: &str,
        value: &Value,
    ) -> ReflectionResult<()>;
}

/// Ordered, immutable list of injection strategies.
///
/// # Examples
///
/// ```
/// use prop_reflect::injection::{InjectionStrategies, ReflectionStrategy};
///
/// let defaults = InjectionStrategies::defaults();
/// assert_eq!(defaults.names(), ["setter", "named_method", "reflection"]);
///
/// let only_fields = InjectionStrategies::new([ReflectionStrategy]);
/// assert_eq!(only_fields.len(), 1);
/// ```
#[derive(Clone)]
pub struct InjectionStrategies(Arc<[Arc<dyn InjectionStrategy>]>);

impl InjectionStrategies {
    /// Setter, then named method, then direct field access.
    #[must_use]
    pub fn defaults() -> Self {
        Self(Arc::new([
            Arc::new(SetterStrategy) as Arc<dyn InjectionStrategy>,
            Arc::new(NamedMethodStrategy),
            Arc::new(ReflectionStrategy),
        ]))
    }

    /// Builds a list from concrete strategies of one type.
    #[must_use]
    pub fn new<S, I>(strategies: I) -> Self
    where
        S: InjectionStrategy + 'static,
        I: IntoIterator<Item = S>,
    {
        strategies
            .into_iter()
            .map(|strategy| Arc::new(strategy) as Arc<dyn InjectionStrategy>)
            .collect()
    }

    /// A list with no strategies; every injection through it fails.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new().into())
    }

    /// Returns a copy with `strategy` tried before every existing entry.
    #[must_use]
    pub fn with_first(&self, strategy: impl InjectionStrategy + 'static) -> Self {
        std::iter::once(Arc::new(strategy) as Arc<dyn InjectionStrategy>)
            .chain(self.0.iter().cloned())
            .collect()
    }

    /// Returns a copy with `strategy` tried after every existing entry.
    #[must_use]
    pub fn with_last(&self, strategy: impl InjectionStrategy + 'static) -> Self {
        self.0
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::new(strategy) as Arc<dyn InjectionStrategy>))
            .collect()
    }

    /// Number of strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the list holds no strategies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strategy at `index`, in precedence order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn InjectionStrategy> {
        self.0.get(index).map(|strategy| &**strategy)
    }

    /// Iterates in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn InjectionStrategy> {
        self.0.iter().map(|strategy| &**strategy)
    }

    /// Strategy names in precedence order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|strategy| strategy.name()).collect()
    }

    /// Injects `value` through the first strategy supporting `property`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::NotInjectable`] when no strategy supports
    /// the property, or the error of the selected strategy.
    pub fn inject(
        &self,
        object: &mut dyn Reflect,
        property: &str,
        value: &Value,
    ) -> ReflectionResult<()> {
        for strategy in self.iter() {
            if strategy.supports(&*object, property, value) {
                debug!(
                    property,
                    strategy = strategy.name(),
                    target = object.type_name(),
                    "injecting property"
                );
                return strategy.inject(object, property, value);
            }
            trace!(property, strategy = strategy.name(), "strategy skipped");
        }
        Err(ReflectionError::not_injectable(property))
    }
}

impl Default for InjectionStrategies {
    fn default() -> Self {
        Self::defaults()
    }
}

impl FromIterator<Arc<dyn InjectionStrategy>> for InjectionStrategies {
    fn from_iter<I: IntoIterator<Item = Arc<dyn InjectionStrategy>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for InjectionStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn unsupported(strategy: &'static str, property: &str) -> ReflectionError {
    ReflectionError::UnsupportedOperation {
        strategy,
        property: property.to_owned(),
    }
}
