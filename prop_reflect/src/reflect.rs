//! The introspection capability strategies work against.
//!
//! Rust has no runtime reflection, so types opt in: `#[derive(Reflect)]`
//! describes the fields of a struct and `#[reflect_methods]` describes the
//! methods of an `impl` block. A type that does not implement [`Reflect`]
//! cannot be handed to a builder at all; a type that implements it but lacks
//! a member still fails at run time with a logic error.

use std::any::Any;

use crate::{ReflectionResult, Value};

/// Declared visibility of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Declared `pub`.
    Public,
    /// Private or restricted (`pub(crate)`, `pub(super)`, …).
    Private,
}

/// How a method borrows its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// `&self`: callable through [`Reflect::call`] and [`Reflect::call_mut`].
    Shared,
    /// `&mut self`: callable through [`Reflect::call_mut`] only.
    Exclusive,
}

/// Static description of a reflected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Property name of the field.
    pub name: &'static str,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Rust type name of the field.
    pub type_name: &'static str,
}

/// Static description of a reflected method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    /// Registered name, in lower camel case.
    pub name: &'static str,
    /// Number of parameters besides the receiver.
    pub arity: usize,
    /// Receiver borrow.
    pub receiver: Receiver,
}

impl MethodInfo {
    /// Returns `true` when the method can be called through `&self`.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.receiver == Receiver::Shared
    }
}

/// Member-level access to an object, generated by `#[derive(Reflect)]`.
///
/// The trait is object safe; strategies receive `&dyn Reflect` or
/// `&mut dyn Reflect`.
pub trait Reflect: Any + Send {
    /// Rust type name of the implementing type.
    fn type_name(&self) -> &'static str;

    /// Every reflected field, in declaration order.
    fn fields(&self) -> &'static [FieldInfo];

    /// Every reflected method.
    fn methods(&self) -> &'static [MethodInfo];

    /// Reads the field `name` into a [`Value`].
    fn read_field(&self, name: &str) -> Option<Value>;

    /// Writes `value` into the field `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReflectionError::UnknownMember`] when no such field exists
    /// and [`crate::ReflectionError::TypeMismatch`] when `value` is not of the
    /// field's type.
    fn write_field(&mut self, name: &str, value: &Value) -> ReflectionResult<()>;

    /// Invokes the `&self` method `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReflectionError::UnknownMember`] when no such shared method
    /// exists, [`crate::ReflectionError::ArityMismatch`] for a wrong argument count
    /// and [`crate::ReflectionError::TypeMismatch`] for an argument of the wrong
    /// type.
    fn call(&self, name: &str, args: &[Value]) -> ReflectionResult<Value>;

    /// Invokes the method `name` with exclusive access.
    ///
    /// # Errors
    ///
    /// As for [`Reflect::call`].
    fn call_mut(&mut self, name: &str, args: &[Value]) -> ReflectionResult<Value>;

    /// Looks up the field `name`.
    fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// Looks up the method `name`.
    fn method(&self, name: &str) -> Option<&'static MethodInfo> {
        self.methods().iter().find(|method| method.name == name)
    }
}

/// Method table contributed by `#[reflect_methods]`.
///
/// Structs opt in with `#[reflect(methods)]`; their [`Reflect`] impl then
/// forwards method lookups and calls here.
pub trait ReflectMethods {
    /// Every registered method.
    const METHODS: &'static [MethodInfo];

    /// Dispatches a `&self` call.
    ///
    /// # Errors
    ///
    /// As for [`Reflect::call`].
    fn call_method(&self, name: &str, args: &[Value]) -> ReflectionResult<Value>;

    /// Dispatches a call needing exclusive access.
    ///
    /// # Errors
    ///
    /// As for [`Reflect::call`].
    fn call_method_mut(&mut self, name: &str, args: &[Value]) -> ReflectionResult<Value>;
}

/// Helpers used by generated code. Not part of the stable API.
#[doc(hidden)]
pub mod support {
    use std::any::{Any, type_name};
    use std::fmt::Display;

    use crate::{ReflectionError, ReflectionResult, Value};

    /// Clones `value` out as `T` or reports a type mismatch on `member`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::TypeMismatch`] when the stored type differs.
    pub fn take<T: Any + Clone>(member: &str, value: &Value) -> ReflectionResult<T> {
        value
            .downcast::<T>()
            .ok_or_else(|| {
                ReflectionError::type_mismatch(member, type_name::<T>(), value.type_name())
            })
    }

    /// Borrows `value` as `T` or reports a type mismatch on `member`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::TypeMismatch`] when the stored type differs.
    pub fn borrow<'v, T: Any>(member: &str, value: &'v Value) -> ReflectionResult<&'v T> {
        value
            .downcast_ref::<T>()
            .ok_or_else(|| {
                ReflectionError::type_mismatch(member, type_name::<T>(), value.type_name())
            })
    }

    /// Borrows a `String` value as `&str`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::TypeMismatch`] when the stored type is not
    /// a `String`.
    pub fn borrow_str<'v>(member: &str, value: &'v Value) -> ReflectionResult<&'v str> {
        borrow::<String>(member, value).map(String::as_str)
    }

    /// Builds the error for a call with the wrong number of arguments.
    #[must_use]
    pub fn arity_mismatch(method: &str, expected: usize, actual: usize) -> ReflectionError {
        ReflectionError::ArityMismatch {
            method: method.to_owned(),
            expected,
            actual,
        }
    }

    /// Builds the error for a method or constructor that returned `Err`.
    #[must_use]
    pub fn method_failed(method: &str, error: &impl Display) -> ReflectionError {
        ReflectionError::method_failed(method, error.to_string())
    }
}
