//! Unit tests for the two-phase verification protocol.

use rstest::rstest;
use test_helpers::recorder::{CallRecorder, FAILURE, RESULT};

use crate::{CaseError, CaseRunner, EffectOutcome, Failure, Outcome, VerifierRole};

#[derive(Debug, thiserror::Error)]
#[error("argument rejected")]
struct Rejected;

fn value_outcome(result: i32, fail: bool) -> Outcome<i32> {
    CaseRunner::new("desc").run_fallible(|| if fail { Err(Rejected) } else { Ok(result) })
}

fn effect_outcome(fail: bool) -> EffectOutcome {
    CaseRunner::new("desc").run_effect_fallible(|| if fail { Err(Rejected) } else { Ok(()) })
}

fn verify_recorded(outcome: &Outcome<i32>, rec: &CallRecorder) {
    outcome.verify(
        |value, description| rec.record(RESULT, description, *value),
        |failure, description| rec.record(FAILURE, description, failure.map(Failure::kind)),
    );
}

#[rstest]
#[case(0, false, vec![FAILURE, RESULT])]
#[case(1, false, vec![FAILURE, RESULT])]
#[case(-1, false, vec![FAILURE, RESULT])]
#[case(0, true, vec![FAILURE])]
fn value_phases_follow_capture(
    #[case] result: i32,
    #[case] fail: bool,
    #[case] expected: Vec<&'static str>,
) {
    let outcome = value_outcome(result, fail);
    let rec = CallRecorder::new();
    verify_recorded(&outcome, &rec);
    assert_eq!(rec.roles(), expected);
    assert!(rec.calls().iter().all(|call| call.description == "desc"));
}

#[test]
fn result_verifier_sees_returned_value() {
    let outcome = value_outcome(-1, false);
    let rec = CallRecorder::new();
    verify_recorded(&outcome, &rec);
    let detail = rec
        .calls()
        .into_iter()
        .find(|call| call.role == RESULT)
        .map(|call| call.detail);
    assert_eq!(detail.as_deref(), Some("-1"));
}

#[test]
fn failure_verifier_sees_captured_failure() {
    let outcome = value_outcome(0, true);
    outcome.verify(
        |_, _| panic!("result verifier must not run after a failure"),
        |failure, description| {
            assert_eq!(description, "desc");
            assert!(failure.is_some_and(|f| f.is::<Rejected>()));
        },
    );
}

#[rstest]
#[case(false, vec![FAILURE, RESULT])]
#[case(true, vec![FAILURE])]
fn effect_phases_follow_capture(#[case] fail: bool, #[case] expected: Vec<&'static str>) {
    let outcome = effect_outcome(fail);
    let rec = CallRecorder::new();
    outcome.verify(
        |description| rec.record(RESULT, description, ()),
        |failure, description| rec.record(FAILURE, description, failure.map(Failure::kind)),
    );
    assert_eq!(rec.roles(), expected);
}

#[test]
fn verification_is_repeatable() {
    let outcome = value_outcome(3, false);
    let first = CallRecorder::new();
    let second = CallRecorder::new();
    verify_recorded(&outcome, &first);
    verify_recorded(&outcome, &second);
    assert_eq!(first.calls(), second.calls());
    assert_eq!(outcome.result(), Some(&3));
}

#[test]
fn failed_outcome_exposes_default_result() {
    let outcome = value_outcome(9, true);
    assert!(!outcome.is_success());
    assert_eq!(outcome.result(), None);
    assert_eq!(outcome.result_or_default(), 0);
    assert!(outcome.into_result().is_err());
}

#[rstest]
#[case(true, false, VerifierRole::Failure)]
#[case(false, true, VerifierRole::Result)]
#[case(false, false, VerifierRole::Result)]
fn builder_rejects_missing_verifiers(
    #[case] with_result: bool,
    #[case] with_failure: bool,
    #[case] missing: VerifierRole,
) {
    let outcome = value_outcome(0, false);
    let rec = CallRecorder::new();
    let mut pending = outcome.verification();
    if with_result {
        pending = pending.on_result(|value, description| rec.record(RESULT, description, *value));
    }
    if with_failure {
        pending = pending.on_failure(|_, description| rec.record(FAILURE, description, ()));
    }
    match pending.verify() {
        Err(CaseError::MissingVerifier { role }) => assert_eq!(role, missing),
        other => panic!("expected a missing verifier error, got {other:?}"),
    }
    assert!(rec.calls().is_empty(), "no verifier may run on a usage error");
}

#[test]
fn builder_runs_both_phases() {
    let outcome = value_outcome(4, false);
    let rec = CallRecorder::new();
    let verified = outcome
        .verification()
        .on_failure(|failure, description| rec.record(FAILURE, description, failure.is_some()))
        .on_result(|value, description| rec.record(RESULT, description, *value))
        .verify();
    assert!(verified.is_ok());
    assert_eq!(rec.roles(), vec![FAILURE, RESULT]);
}

#[rstest]
#[case(true, false, VerifierRole::Failure)]
#[case(false, true, VerifierRole::Result)]
fn effect_builder_rejects_missing_verifiers(
    #[case] with_result: bool,
    #[case] with_failure: bool,
    #[case] missing: VerifierRole,
) {
    let outcome = effect_outcome(true);
    let rec = CallRecorder::new();
    let mut pending = outcome.verification();
    if with_result {
        pending = pending.on_result(|description| rec.record(RESULT, description, ()));
    }
    if with_failure {
        pending = pending.on_failure(|_, description| rec.record(FAILURE, description, ()));
    }
    let err = pending.verify().err();
    assert!(matches!(err, Some(CaseError::MissingVerifier { role }) if role == missing));
    assert!(rec.calls().is_empty());
}

#[test]
fn effect_builder_skips_result_after_failure() {
    let outcome = effect_outcome(true);
    let rec = CallRecorder::new();
    let verified = outcome
        .verification()
        .on_result(|description| rec.record(RESULT, description, ()))
        .on_failure(|failure, description| rec.record(FAILURE, description, failure.is_some()))
        .verify();
    assert!(verified.is_ok());
    assert_eq!(rec.roles(), vec![FAILURE]);
}
