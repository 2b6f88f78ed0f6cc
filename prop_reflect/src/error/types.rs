//! The [`ReflectionError`] enum.

use thiserror::Error;

/// Errors raised by builders, strategies, instantiators and generated
/// introspection code.
///
/// Each variant belongs to one [`ErrorKind`](super::ErrorKind): misuse at
/// configuration time is an invalid argument, while a property or member
/// that cannot be resolved is a logic error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectionError {
    /// No configured injection strategy supports the property.
    #[error("Property \"{property}\" cannot be injected")]
    NotInjectable {
        /// Name of the offending property.
        property: String,
    },

    /// No configured extraction strategy supports the property.
    #[error("Property \"{property}\" cannot be extracted")]
    NotExtractable {
        /// Name of the offending property.
        property: String,
    },

    /// A strategy was asked to act on a property it does not support.
    #[error("Strategy \"{strategy}\" does not support property \"{property}\"")]
    UnsupportedOperation {
        /// Name of the strategy.
        strategy: &'static str,
        /// Name of the offending property.
        property: String,
    },

    /// The type has no member with the requested name.
    #[error("Type \"{type_name}\" has no member \"{member}\"")]
    UnknownMember {
        /// Rust type name of the target.
        type_name: &'static str,
        /// Requested member name.
        member: String,
    },

    /// A method was invoked with the wrong number of arguments.
    #[error("Method \"{method}\" expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Registered method name.
        method: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// A reflectively invoked method or constructor returned an error.
    #[error("Method \"{method}\" failed: {message}")]
    MethodFailed {
        /// Registered method or constructor name.
        method: String,
        /// Display form of the error the method returned.
        message: String,
    },

    /// A required constructor argument has no pending value.
    #[error("Parameter \"{parameter}\" of \"{type_name}\" has no value")]
    MissingArgument {
        /// Rust type name being constructed.
        type_name: &'static str,
        /// Constructor parameter name.
        parameter: String,
    },

    /// A value does not have the type the member expects.
    #[error("\"{member}\" expects a value of type {expected}, got {actual}")]
    TypeMismatch {
        /// Field, parameter or argument name.
        member: String,
        /// Type the member accepts.
        expected: &'static str,
        /// Type of the supplied value.
        actual: &'static str,
    },

    /// A strategy name in a configuration is not known.
    #[error("Unknown {kind} strategy \"{name}\"")]
    UnknownStrategy {
        /// `injection` or `extraction`.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },
}
