//! Builder that instantiates a type before injecting into it.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::StrategyConfig;
use crate::extraction::ExtractionStrategies;
use crate::injection::InjectionStrategies;
use crate::instantiator::{Construct, ConstructorInstantiator, Instantiator};
use crate::object::{ReflectionObject, Shared, share};
use crate::{Properties, Reflect, ReflectionResult, Value};

/// Immutable builder that creates a `T` and populates it.
///
/// Building first asks the instantiator for a new instance, then injects
/// only the pending properties that were *not* constructor parameters. A
/// value handed to the constructor is therefore never pushed through a
/// setter or field write as well.
///
/// # Examples
///
/// ```
/// use prop_reflect::{Reflect, ReflectionClass, reflect_methods};
///
/// #[derive(Reflect)]
/// #[reflect(methods)]
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// #[reflect_methods]
/// impl Account {
///     #[reflect(constructor)]
///     pub fn new(owner: String) -> Self {
///         Self { owner, balance: 0 }
///     }
/// }
///
/// let account = ReflectionClass::<Account>::new()
///     .with_property("owner", "ada")
///     .with_property("balance", 10_i64)
///     .build_object()?;
///
/// let account = account.lock();
/// assert_eq!((account.owner.as_str(), account.balance), ("ada", 10));
/// # Ok::<(), prop_reflect::ReflectionError>(())
/// ```
pub struct ReflectionClass<T> {
    properties: Properties,
    injection_strategies: InjectionStrategies,
    extraction_strategies: ExtractionStrategies,
    instantiator: Arc<dyn Instantiator<T>>,
}

impl<T: Construct> ReflectionClass<T> {
    /// Creates a builder using the constructor registered for `T`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_instantiator(ConstructorInstantiator::new())
    }
}

impl<T: Construct> Default for ReflectionClass<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Reflect> ReflectionClass<T> {
    /// Creates a builder creating instances through `instantiator`.
    #[must_use]
    pub fn with_instantiator(instantiator: impl Instantiator<T> + 'static) -> Self {
        Self {
            properties: Properties::new(),
            injection_strategies: InjectionStrategies::defaults(),
            extraction_strategies: ExtractionStrategies::defaults(),
            instantiator: Arc::new(instantiator),
        }
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

    /// Extraction strategies handed to the object builder.
    #[must_use]
    pub const fn extraction_strategies(&self) -> &ExtractionStrategies {
        &self.extraction_strategies
    }

    /// The instantiator creating new instances.
    #[must_use]
    pub fn instantiator(&self) -> &dyn Instantiator<T> {
        &*self.instantiator
    }

    /// Instantiates `T` and injects the pending properties the constructor
    /// did not consume.
    ///
    /// # Errors
    ///
    /// Propagates instantiator failures and the injection errors of
    /// [`ReflectionObject::build_object`].
    pub fn build_object(&self) -> ReflectionResult<Shared<T>> {
        self.reflection_object()?.build_object()
    }

    /// Instantiates `T` and returns an object builder holding the pending
    /// properties the constructor did not consume, without injecting them.
    ///
    /// # Errors
    ///
    /// Propagates instantiator failures.
    pub fn reflection_object(&self) -> ReflectionResult<ReflectionObject<T>> {
        let object = self.instantiator.build(&self.properties)?;
        let parameters = self.instantiator.parameters();
        let remaining = self
            .properties
            .filter(|property, _| !parameters.contains(&property));
        debug!(
            target_type = type_name::<T>(),
            consumed = self.properties.len() - remaining.len(),
            remaining = remaining.len(),
            "instantiated class"
        );
        Ok(ReflectionObject::from_parts(
            share(object),
            remaining,
            self.injection_strategies.clone(),
            self.extraction_strategies.clone(),
        ))
    }
}

impl<T> Clone for ReflectionClass<T> {
    fn clone(&self) -> Self {
        Self {
            properties: self.properties.clone(),
            injection_strategies: self.injection_strategies.clone(),
            extraction_strategies: self.extraction_strategies.clone(),
            instantiator: Arc::clone(&self.instantiator),
        }
    }
}

impl<T> fmt::Debug for ReflectionClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflectionClass")
            .field("target_type", &type_name::<T>())
            .field("properties", &self.properties)
            .field("injection_strategies", &self.injection_strategies)
            .field("extraction_strategies", &self.extraction_strategies)
            .finish_non_exhaustive()
    }
}
