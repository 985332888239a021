//! Unit tests for usage error rendering and conversions.

use rstest::rstest;

use super::{CaseError, VerifierRole};

#[rstest]
#[case(VerifierRole::Result, "missing result verifier")]
#[case(VerifierRole::Failure, "missing failure verifier")]
fn renders_missing_verifier(#[case] role: VerifierRole, #[case] expected: &str) {
    let err = CaseError::missing_verifier(role);
    assert_eq!(err.to_string(), expected);
}

#[test]
fn figment_errors_round_trip_through_config_variant() {
    let err: CaseError = figment::Error::from("bad value").into();
    assert!(matches!(err, CaseError::Config(_)));
    let back = figment::Error::from(err);
    assert_eq!(back.to_string(), "bad value");
}

#[test]
fn other_variants_become_messages() {
    let back = figment::Error::from(CaseError::missing_verifier(VerifierRole::Result));
    assert_eq!(back.to_string(), "missing result verifier");
}
