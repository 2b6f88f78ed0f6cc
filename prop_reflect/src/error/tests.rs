//! Unit tests for error messages and classification.

use rstest::rstest;

use super::{ErrorKind, ReflectionError};

#[rstest]
#[case::injected(ReflectionError::not_injectable("a"), "Property \"a\" cannot be injected")]
#[case::extracted(ReflectionError::not_extractable("a"), "Property \"a\" cannot be extracted")]
#[case::snake_name(
    ReflectionError::not_injectable("foo_bar"),
    "Property \"foo_bar\" cannot be injected"
)]
fn resolution_messages_are_exact(#[case] err: ReflectionError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
#[case::not_injectable(ReflectionError::not_injectable("a"), ErrorKind::Logic)]
#[case::not_extractable(ReflectionError::not_extractable("a"), ErrorKind::Logic)]
#[case::unsupported(
    ReflectionError::UnsupportedOperation { strategy: "setter", property: "a".into() },
    ErrorKind::Logic
)]
#[case::unknown_member(ReflectionError::unknown_member("Foo", "bar"), ErrorKind::Logic)]
#[case::arity(
    ReflectionError::ArityMismatch { method: "d".into(), expected: 1, actual: 0 },
    ErrorKind::Logic
)]
#[case::missing(
    ReflectionError::MissingArgument { type_name: "Foo", parameter: "a".into() },
    ErrorKind::Logic
)]
#[case::method_failed(ReflectionError::method_failed("setAge", "too old"), ErrorKind::Logic)]
#[case::mismatch(
    ReflectionError::type_mismatch("a", "i32", "alloc::string::String"),
    ErrorKind::InvalidArgument
)]
#[case::unknown_strategy(
    ReflectionError::UnknownStrategy { kind: "injection", name: "magic".into() },
    ErrorKind::InvalidArgument
)]
fn variants_are_classified(#[case] err: ReflectionError, #[case] kind: ErrorKind) {
    assert_eq!(err.kind(), kind);
    assert_eq!(err.is_logic(), kind == ErrorKind::Logic);
    assert_eq!(err.is_invalid_argument(), kind == ErrorKind::InvalidArgument);
}

#[rstest]
fn type_mismatch_names_both_types() {
    let err = ReflectionError::type_mismatch("a", "i32", "alloc::string::String");
    assert_eq!(
        err.to_string(),
        "\"a\" expects a value of type i32, got alloc::string::String"
    );
}

#[rstest]
fn method_failure_carries_the_returned_message() {
    let err = ReflectionError::method_failed("setAge", "age 999 is over 150");
    assert_eq!(
        err.to_string(),
        "Method \"setAge\" failed: age 999 is over 150"
    );
}
