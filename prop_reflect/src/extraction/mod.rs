//! Strategies that read a named value out of an object.
//!
//! Mirror image of [`crate::injection`]: the first strategy supporting a
//! property reads it.

mod getter;
mod named_method;
mod reflection;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{Properties, Reflect, ReflectionError, ReflectionResult, Value};

pub use getter::GetterStrategy;
pub use named_method::NamedMethodStrategy;
pub use reflection::ReflectionStrategy;

/// A way of reading a property from an object.
pub trait ExtractionStrategy: Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Returns `true` when this strategy can read `property` from `object`.
    fn supports(&self, object: &dyn Reflect, property: &str) -> bool;

    /// Reads `property`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::UnsupportedOperation`] when called although
    /// [`ExtractionStrategy::supports`] is `false`, or whatever error the
    /// underlying member access reports.
    fn extract(&self, object: &dyn Reflect, property: &str) -> ReflectionResult<Value>;
}

/// Ordered, immutable list of extraction strategies.
///
/// # Examples
///
/// ```
/// use prop_reflect::extraction::{ExtractionStrategies, GetterStrategy};
///
/// let defaults = ExtractionStrategies::defaults();
/// assert_eq!(defaults.names(), ["getter", "named_method", "reflection"]);
/// assert_eq!(ExtractionStrategies::new([GetterStrategy]).len(), 1);
/// ```
#[derive(Clone)]
pub struct ExtractionStrategies(Arc<[Arc<dyn ExtractionStrategy>]>);

impl ExtractionStrategies {
    /// Getter, then named method or public field, then direct field access.
    #[must_use]
    pub fn defaults() -> Self {
        Self(Arc::new([
            Arc::new(GetterStrategy) as Arc<dyn ExtractionStrategy>,
            Arc::new(NamedMethodStrategy),
            Arc::new(ReflectionStrategy),
        ]))
    }

    /// Builds a list from concrete strategies of one type.
    #[must_use]
    pub fn new<S, I>(strategies: I) -> Self
    where
        S: ExtractionStrategy + 'static,
        I: IntoIterator<Item = S>,
    {
        strategies
            .into_iter()
            .map(|strategy| Arc::new(strategy) as Arc<dyn ExtractionStrategy>)
            .collect()
    }

    /// A list with no strategies; every extraction through it fails.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new().into())
    }

    /// Returns a copy with `strategy` tried before every existing entry.
    #[must_use]
    pub fn with_first(&self, strategy: impl ExtractionStrategy + 'static) -> Self {
        std::iter::once(Arc::new(strategy) as Arc<dyn ExtractionStrategy>)
            .chain(self.0.iter().cloned())
            .collect()
    }

    /// Returns a copy with `strategy` tried after every existing entry.
    #[must_use]
    pub fn with_last(&self, strategy: impl ExtractionStrategy + 'static) -> Self {
        self.0
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::new(strategy) as Arc<dyn ExtractionStrategy>))
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
    pub fn get(&self, index: usize) -> Option<&dyn ExtractionStrategy> {
        self.0.get(index).map(|strategy| &**strategy)
    }

    /// Iterates in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ExtractionStrategy> {
        self.0.iter().map(|strategy| &**strategy)
    }

    /// Strategy names in precedence order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|strategy| strategy.name()).collect()
    }

    /// Reads `property` through the first strategy supporting it.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::NotExtractable`] when no strategy supports
    /// the property, or the error of the selected strategy.
    pub fn extract(&self, object: &dyn Reflect, property: &str) -> ReflectionResult<Value> {
        for strategy in self.iter() {
            if strategy.supports(object, property) {
                debug!(
                    property,
                    strategy = strategy.name(),
                    target = object.type_name(),
                    "extracting property"
                );
                return strategy.extract(object, property);
            }
            trace!(property, strategy = strategy.name(), "strategy skipped");
        }
        Err(ReflectionError::not_extractable(property))
    }

    /// Reads every name in `properties`, keeping the requested order.
    ///
    /// # Errors
    ///
    /// Stops at the first property that cannot be extracted.
    pub fn extract_all<I, S>(
        &self,
        object: &dyn Reflect,
        properties: I,
    ) -> ReflectionResult<Properties>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        properties
            .into_iter()
            .map(|requested| {
                let property = requested.as_ref();
                self.extract(object, property)
                    .map(|value| (property.to_owned(), value))
            })
            .collect::<ReflectionResult<Vec<_>>>()
            .map(|values| values.into_iter().collect())
    }
}

impl Default for ExtractionStrategies {
    fn default() -> Self {
        Self::defaults()
    }
}

impl FromIterator<Arc<dyn ExtractionStrategy>> for ExtractionStrategies {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ExtractionStrategy>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for ExtractionStrategies {
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

/// Whether `name` is a zero-argument `&self` method.
fn readable_method(object: &dyn Reflect, name: &str) -> bool {
    object
        .method(name)
        .is_some_and(|method| method.arity == 0 && method.is_shared())
}
