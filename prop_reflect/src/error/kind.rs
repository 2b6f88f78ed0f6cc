//! Classification of [`ReflectionError`] variants.

use super::ReflectionError;

/// The two failure families callers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration-time misuse, such as an unknown strategy name or a value
    /// of the wrong type.
    InvalidArgument,
    /// Resolution-time failure, such as a property no strategy supports.
    Logic,
}

impl ReflectionError {
    /// Returns the family this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_reflect::{ErrorKind, ReflectionError};
    ///
    /// let err = ReflectionError::not_injectable("a");
    /// assert_eq!(err.kind(), ErrorKind::Logic);
    /// assert_eq!(err.to_string(), "Property \"a\" cannot be injected");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } | Self::UnknownStrategy { .. } => ErrorKind::InvalidArgument,
            Self::NotInjectable { .. }
            | Self::NotExtractable { .. }
            | Self::UnsupportedOperation { .. }
            | Self::UnknownMember { .. }
            | Self::ArityMismatch { .. }
            | Self::MethodFailed { .. }
            | Self::MissingArgument { .. } => ErrorKind::Logic,
        }
    }

    /// Returns `true` for [`ErrorKind::Logic`] errors.
    #[must_use]
    pub const fn is_logic(&self) -> bool {
        matches!(self.kind(), ErrorKind::Logic)
    }

    /// Returns `true` for [`ErrorKind::InvalidArgument`] errors.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }

    /// Builds [`ReflectionError::NotInjectable`].
    #[must_use]
    pub fn not_injectable(property: impl Into<String>) -> Self {
        Self::NotInjectable {
            property: property.into(),
        }
    }

    /// Builds [`ReflectionError::NotExtractable`].
    #[must_use]
    pub fn not_extractable(property: impl Into<String>) -> Self {
        Self::NotExtractable {
            property: property.into(),
        }
    }

    /// Builds [`ReflectionError::UnknownMember`].
    #[must_use]
    pub fn unknown_member(type_name: &'static str, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            type_name,
            member: member.into(),
        }
    }

    /// Builds [`ReflectionError::MethodFailed`] from the error a method
    /// returned.
    #[must_use]
    pub fn method_failed(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MethodFailed {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Builds [`ReflectionError::TypeMismatch`] for a value that could not be
    /// read as `expected`.
    #[must_use]
    pub fn type_mismatch(
        member: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            member: member.into(),
            expected,
            actual,
        }
    }
}
