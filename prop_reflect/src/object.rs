//! Builder over an existing object.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::StrategyConfig;
use crate::extraction::ExtractionStrategies;
use crate::injection::InjectionStrategies;
use crate::{Properties, Reflect, ReflectionResult, Value};

/// Handle through which a target object is shared with a builder.
pub type Shared<T> = Arc<Mutex<T>>;

/// Wraps `object` in a fresh [`Shared`] handle.
#[must_use]
pub fn share<T>(object: T) -> Shared<T> {
    Arc::new(Mutex::new(object))
}

/// Immutable builder that injects pending properties into an existing
/// object and extracts values out of it.
///
/// The target is shared with the caller rather than owned: building writes
/// through the handle and returns that same handle. Every `with_*` call
/// returns a new builder and leaves the receiver as it was.
///
/// # Examples
///
/// ```
/// use prop_reflect::{Reflect, ReflectionObject, reflect_methods, share};
///
/// #[derive(Reflect, Default)]
/// #[reflect(methods)]
/// struct Greeting {
///     text: String,
///     shouted: bool,
/// }
///
/// #[reflect_methods]
/// impl Greeting {
///     pub fn set_text(&mut self, text: String) {
///         self.shouted = text.ends_with('!');
///         self.text = text;
///     }
/// }
///
/// let greeting = share(Greeting::default());
/// ReflectionObject::new(greeting.clone())
///     .with_property("text", "hello!")
///     .build_object()?;
///
/// assert!(greeting.lock().shouted);
/// # Ok::<(), prop_reflect::ReflectionError>(())
/// ```
pub struct ReflectionObject<T> {
    target: Shared<T>,
    properties: Properties,
    injection_strategies: InjectionStrategies,
    extraction_strategies: ExtractionStrategies,
}

impl<T: Reflect> ReflectionObject<T> {
    /// Wraps `target` with no pending properties and the default strategies.
    #[must_use]
    pub fn new(target: Shared<T>) -> Self {
        Self {
            target,
            properties: Properties::new(),
            injection_strategies: InjectionStrategies::defaults(),
            extraction_strategies: ExtractionStrategies::defaults(),
        }
    }

    pub(crate) const fn from_parts(
        target: Shared<T>,
        properties: Properties,
        injection_strategies: InjectionStrategies,
        extraction_strategies: ExtractionStrategies,
    ) -> Self {
        Self {
            target,
            properties,
            injection_strategies,
            extraction_strategies,
        }
    }

    /// Wraps a freshly shared `object`.
    #[must_use]
    pub fn from_value(object: T) -> Self {
        Self::new(share(object))
    }

    /// Returns a copy with `property` set to `value`.
    #[must_use]
    pub fn with_property(&self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            properties: self.properties.set(property, value),
            ..self.clone()
        }
    }

    /// Returns a copy with every entry of `properties` merged over the
    /// pending ones.
    #[must_use]
    pub fn with_properties<I, K, V>(&self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            properties: self.properties.merge(properties),
            ..self.clone()
        }
    }

    /// Returns a copy using `strategies` for injection.
    #[must_use]
    pub fn with_injection_strategies(&self, strategies: InjectionStrategies) -> Self {
        Self {
            injection_strategies: strategies,
            ..self.clone()
        }
    }

    /// Returns a copy using `strategies` for extraction.
    #[must_use]
    pub fn with_extraction_strategies(&self, strategies: ExtractionStrategies) -> Self {
        Self {
            extraction_strategies: strategies,
            ..self.clone()
        }
    }

    /// Returns a copy using the strategies named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReflectionError::UnknownStrategy`] when `config`
    /// names a strategy that does not exist.
    pub fn with_config(&self, config: &StrategyConfig) -> ReflectionResult<Self> {
        Ok(Self {
            injection_strategies: config.injection_strategies()?,
            extraction_strategies: config.extraction_strategies()?,
            ..self.clone()
        })
    }

    /// Pending properties.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Injection strategies in precedence order.
    #[must_use]
    pub const fn injection_strategies(&self) -> &InjectionStrategies {
        &self.injection_strategies
    }

    /// Extraction strategies in precedence order.
    #[must_use]
    pub const fn extraction_strategies(&self) -> &ExtractionStrategies {
        &self.extraction_strategies
    }

    /// The wrapped target.
    #[must_use]
    pub const fn target(&self) -> &Shared<T> {
        &self.target
    }

    /// Injects every pending property into the target and returns the
    /// target handle.
    ///
    /// Properties are applied in insertion order. The first failure aborts
    /// the build; properties injected before it stay applied.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReflectionError::NotInjectable`] for a property no
    /// strategy supports, or the error of the strategy that failed.
    pub fn build_object(&self) -> ReflectionResult<Shared<T>> {
        {
            let mut target = self.target.lock();
            debug!(
                target_type = target.type_name(),
                properties = self.properties.len(),
                "injecting properties"
            );
            for (property, value) in self.properties.iter() {
                self.injection_strategies
                    .inject(&mut *target, property, value)?;
            }
        }
        Ok(Arc::clone(&self.target))
    }

    /// Reads `properties` from the target, in the requested order.
    ///
    /// Pending properties are neither consulted nor consumed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReflectionError::NotExtractable`] for the first
    /// property no strategy supports.
    pub fn extract<I, S>(&self, properties: I) -> ReflectionResult<Properties>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let target = self.target.lock();
        self.extraction_strategies.extract_all(&*target, properties)
    }
}

impl<T> Clone for ReflectionObject<T> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            properties: self.properties.clone(),
            injection_strategies: self.injection_strategies.clone(),
            extraction_strategies: self.extraction_strategies.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ReflectionObject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReflectionObject")
            .field("target_type", &std::any::type_name::<T>())
            .field("properties", &self.properties)
            .field("injection_strategies", &self.injection_strategies)
            .field("extraction_strategies", &self.extraction_strategies)
            .finish()
    }
}
