//! Creating new instances from candidate property values.
//!
//! An [`Instantiator`] builds a `T` and reports which property names it
//! consumes as constructor arguments. [`crate::ReflectionClass`] removes
//! those names before injecting the remaining properties, so a value given
//! to the constructor is never written a second time.

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::{Properties, Reflect, ReflectionError, ReflectionResult};

/// Creates instances of `T`.
pub trait Instantiator<T>: Send + Sync {
    /// Builds a new `T`, drawing constructor arguments from `properties`.
    ///
    /// # Errors
    ///
    /// Returns an error when a required argument is absent or has the wrong
    /// type.
    fn build(&self, properties: &Properties) -> ReflectionResult<T>;

    /// Property names consumed as constructor arguments.
    fn parameters(&self) -> Vec<&str>;
}

/// A type with a registered constructor.
///
/// Generated by `#[reflect_methods]` for an associated function marked
/// `#[reflect(constructor)]`, or by `#[derive(Reflect)]` with
/// `#[reflect(construct = "default")]`.
pub trait Construct: Reflect + Sized {
    /// Constructor parameter names, in declaration order.
    const PARAMETERS: &'static [&'static str];

    /// Calls the constructor.
    ///
    /// # Errors
    ///
    /// Propagates argument lookup failures from [`Arguments`].
    fn construct(arguments: &Arguments<'_>) -> ReflectionResult<Self>;
}

/// Typed view over candidate constructor arguments.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    type_name: &'static str,
    properties: &'a Properties,
}

impl<'a> Arguments<'a> {
    /// Wraps `properties` as the arguments for constructing `T`.
    #[must_use]
    pub fn for_type<T>(properties: &'a Properties) -> Self {
        Self {
            type_name: type_name::<T>(),
            properties,
        }
    }

    /// Returns `true` when `name` has a candidate value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    /// Clones the required argument `name` out as `A`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::MissingArgument`] when `name` has no value
    /// and [`ReflectionError::TypeMismatch`] when the value is not an `A`.
    pub fn get<A: Any + Clone>(&self, name: &str) -> ReflectionResult<A> {
        self.get_optional(name)?
            .ok_or_else(|| ReflectionError::MissingArgument {
                type_name: self.type_name,
                parameter: name.to_owned(),
            })
    }

    /// Clones the optional argument `name` out as `A`.
    ///
    /// An absent name yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::TypeMismatch`] when a value is present but
    /// is not an `A`.
    pub fn get_optional<A: Any + Clone>(&self, name: &str) -> ReflectionResult<Option<A>> {
        self.properties
            .get(name)
            .map(|value| {
                value.downcast::<A>().ok_or_else(|| {
                    ReflectionError::type_mismatch(name, type_name::<A>(), value.type_name())
                })
            })
            .transpose()
    }
}

/// Default instantiator: calls the constructor registered through
/// [`Construct`].
pub struct ConstructorInstantiator<T>(PhantomData<fn() -> T>);

impl<T> ConstructorInstantiator<T> {
    /// Creates the instantiator.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ConstructorInstantiator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ConstructorInstantiator<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ConstructorInstantiator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstructorInstantiator")
            .field(&type_name::<T>())
            .finish()
    }
}

impl<T: Construct> Instantiator<T> for ConstructorInstantiator<T> {
    fn build(&self, properties: &Properties) -> ReflectionResult<T> {
        debug!(
            target_type = type_name::<T>(),
            parameters = ?T::PARAMETERS,
            "constructing instance"
        );
        T::construct(&Arguments::for_type::<T>(properties))
    }

    fn parameters(&self) -> Vec<&str> {
        T::PARAMETERS.to_vec()
    }
}

/// Instantiator backed by a closure and an explicit parameter list.
///
/// Useful for types whose constructor is not registered, or to rename
/// constructor arguments.
///
/// # Examples
///
/// ```
/// use prop_reflect::{FnInstantiator, Instantiator, Properties, Reflect};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let instantiator = FnInstantiator::new(["x"], |args| {
///     Ok(Point { x: args.get("x")?, y: 0 })
/// });
/// let point = instantiator.build(&Properties::new().set("x", 4_i32))?;
/// assert_eq!((point.x, point.y), (4, 0));
/// assert_eq!(instantiator.parameters(), ["x"]);
/// # Ok::<(), prop_reflect::ReflectionError>(())
/// ```
pub struct FnInstantiator<T, F> {
    parameters: Vec<String>,
    factory: F,
    marker: PhantomData<fn() -> T>,
}

impl<T, F> FnInstantiator<T, F>
where
    F: Fn(&Arguments<'_>) -> ReflectionResult<T> + Send + Sync,
{
    /// Creates an instantiator consuming `parameters` and calling `factory`.
    #[must_use]
    pub fn new<I, S>(parameters: I, factory: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            factory,
            marker: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for FnInstantiator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnInstantiator")
            .field("target_type", &type_name::<T>())
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl<T, F> Instantiator<T> for FnInstantiator<T, F>
where
    F: Fn(&Arguments<'_>) -> ReflectionResult<T> + Send + Sync,
{
    fn build(&self, properties: &Properties) -> ReflectionResult<T> {
        debug!(
            target_type = type_name::<T>(),
            parameters = ?self.parameters,
            "constructing instance"
        );
        (self.factory)(&Arguments::for_type::<T>(properties))
    }

    fn parameters(&self) -> Vec<&str> {
        self.parameters.iter().map(String::as_str).collect()
    }
}
