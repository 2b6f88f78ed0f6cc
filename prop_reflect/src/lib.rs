//! Strategy-driven property injection and extraction.
//!
//! `prop_reflect` populates objects from named values and reads named values
//! back out, without requiring every type to expose the same public API.
//! Each property is resolved through an ordered list of strategies (a
//! `set<Name>` method, a method named like the property, or the field
//! itself) and the first strategy that applies wins.
//!
//! * [`ReflectionObject`] wraps an existing, shared object.
//! * [`ReflectionClass`] creates the object first through an
//!   [`Instantiator`], then injects whatever the constructor did not consume.
//!
//! Types opt in to introspection with `#[derive(Reflect)]` and
//! `#[reflect_methods]`, provided by the companion `prop_reflect_macros`
//! crate.
//!
//! ```
//! use prop_reflect::{Reflect, ReflectionObject, reflect_methods, share};
//!
//! #[derive(Reflect, Default)]
//! #[reflect(methods)]
//! struct Sample {
//!     a: i32,
//!     b: i32,
//! }
//!
//! #[reflect_methods]
//! impl Sample {
//!     pub fn get_b(&self) -> i32 {
//!         self.b * 10
//!     }
//! }
//!
//! let sample = share(Sample::default());
//! let refl = ReflectionObject::new(sample)
//!     .with_properties([("a", 1_i32), ("b", 2_i32)]);
//! refl.build_object()?;
//!
//! let values = refl.extract(["a", "b"])?;
//! assert_eq!(values.get_as::<i32>("a"), Some(&1));
//! assert_eq!(values.get_as::<i32>("b"), Some(&20));
//! # Ok::<(), prop_reflect::ReflectionError>(())
//! ```

// Generated code refers to `prop_reflect::…`; this makes those paths resolve
// inside the crate's own tests.
extern crate self as prop_reflect;

pub use prop_reflect_macros::{Reflect, reflect_methods};

mod class;
mod config;
mod error;
pub mod extraction;
pub mod injection;
mod instantiator;
pub mod naming;
mod object;
mod properties;
pub mod reflect;
mod value;

pub use class::ReflectionClass;
pub use config::StrategyConfig;
pub use error::{ErrorKind, ReflectionError, ReflectionResult};
pub use instantiator::{Arguments, Construct, ConstructorInstantiator, FnInstantiator, Instantiator};
pub use object::{ReflectionObject, Shared, share};
pub use properties::Properties;
pub use reflect::{FieldInfo, MethodInfo, Receiver, Reflect, ReflectMethods, Visibility};
pub use value::Value;

#[cfg(test)]
mod test_support;
