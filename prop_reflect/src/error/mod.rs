//! Error types produced while configuring builders or resolving properties.

mod kind;
mod types;

pub use kind::ErrorKind;
pub use types::ReflectionError;

/// Result alias used throughout the crate.
pub type ReflectionResult<T> = Result<T, ReflectionError>;

#[cfg(test)]
mod tests;
