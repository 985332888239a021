//! Unit tests for failure capture and kind identity.

use std::num::ParseIntError;

use rstest::rstest;

use super::{Failure, FailureKind, Panicked};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("typed payload {0}")]
struct Typed(u8);

fn parse_error() -> ParseIntError {
    match "abc".parse::<i32>() {
        Err(err) => err,
        Ok(value) => panic!("expected a parse error, got {value}"),
    }
}

#[test]
fn error_keeps_its_type() {
    let failure = Failure::from_error(parse_error());
    assert!(failure.is::<ParseIntError>());
    assert!(!failure.is_panic());
    assert_eq!(failure.kind(), FailureKind::of::<ParseIntError>());
    assert_eq!(failure.message(), "invalid digit found in string");
    assert!(failure.downcast_ref::<ParseIntError>().is_some());
    assert!(failure.panic_payload().is_none());
}

#[rstest]
#[case(Box::new("static message"), "static message")]
#[case(Box::new(String::from("owned message")), "owned message")]
fn string_panics_are_panicked(
    #[case] payload: Box<dyn std::any::Any + Send>,
    #[case] expected: &str,
) {
    let failure = Failure::from_panic(payload);
    assert!(failure.is_panic());
    assert!(failure.is::<Panicked>());
    assert_eq!(failure.message(), expected);
    assert!(failure.error().is_none());
}

#[test]
fn typed_panic_payload_keeps_its_kind() {
    let failure = Failure::from_panic(Box::new(Typed(7)));
    assert_eq!(failure.kind(), FailureKind::of::<Typed>());
    assert!(!failure.is::<Panicked>());
    assert_eq!(failure.downcast_ref::<Typed>(), Some(&Typed(7)));
    assert_eq!(failure.message(), super::NON_STRING_PAYLOAD);
    assert_eq!(failure.kind().name(), "panic payload (type name unavailable)");
}

#[test]
fn unnamed_payload_kind_reads_clearly_in_mismatches() {
    let captured = Some(Failure::from_panic(Box::new(Typed(1))).kind());
    let expected = Some(FailureKind::of::<ParseIntError>());
    assert_ne!(expected, captured);
    let rendered = format!("{captured:?}");
    assert_eq!(rendered, "Some(panic payload (type name unavailable))");
}

#[test]
fn kinds_compare_by_type_only() {
    assert_eq!(FailureKind::of::<Typed>(), FailureKind::of::<Typed>());
    assert_ne!(FailureKind::of::<Typed>(), FailureKind::of::<ParseIntError>());
    assert!(FailureKind::of::<Typed>().name().ends_with("Typed"));
}

#[test]
fn display_prefixes_kind() {
    let failure = Failure::from_error(Typed(3));
    let rendered = failure.to_string();
    assert!(rendered.ends_with(": typed payload 3"), "{rendered}");
}
