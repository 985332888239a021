//! Convenience verification methods backed by the standard asserter.

use std::fmt::Debug;

use super::Verifiers;
use crate::{EffectOutcome, FailureKind, Outcome};

/// Shorthand verifications for [`Outcome`].
///
/// Every method checks the failure kind first; `None` means no failure is
/// expected. Result checks run only when the work completed.
pub trait OutcomeAssertExt<T> {
    /// Verify the failure kind, then run `result_verifier`.
    fn verify_kind<R>(&self, result_verifier: R, expected_failure: Option<FailureKind>)
    where
        R: FnOnce(&T, &str);

    /// Verify the failure kind, then compare the value with `expected`.
    fn verify_value(&self, expected: &T, expected_failure: Option<FailureKind>)
    where
        T: PartialEq + Debug;

    /// Verify the failure kind, then compare the value's elements with
    /// `expected`.
    fn verify_sequence<U>(&self, expected: &[U], expected_failure: Option<FailureKind>)
    where
        T: AsRef<[U]>,
        U: PartialEq + Debug;

    /// Verify the failure kind, then compare elements using `comparer`.
    fn verify_sequence_by<U, V, C>(
        &self,
        expected: &[V],
        comparer: C,
        expected_failure: Option<FailureKind>,
    ) where
        T: AsRef<[U]>,
        U: Debug,
        V: Debug,
        C: FnMut(&V, &U) -> bool;
}

impl<T> OutcomeAssertExt<T> for Outcome<T> {
    #[track_caller]
    fn verify_kind<R>(&self, result_verifier: R, expected_failure: Option<FailureKind>)
    where
        R: FnOnce(&T, &str),
    {
        let verifiers = Verifiers::standard();
        self.verify(result_verifier, verifiers.failure_kind(expected_failure));
    }

    #[track_caller]
    fn verify_value(&self, expected: &T, expected_failure: Option<FailureKind>)
    where
        T: PartialEq + Debug,
    {
        let verifiers = Verifiers::standard();
        self.verify(
            verifiers.value(expected),
            verifiers.failure_kind(expected_failure),
        );
    }

    #[track_caller]
    fn verify_sequence<U>(&self, expected: &[U], expected_failure: Option<FailureKind>)
    where
        T: AsRef<[U]>,
        U: PartialEq + Debug,
    {
        let verifiers = Verifiers::standard();
        self.verify(
            verifiers.sequence::<T, U>(expected),
            verifiers.failure_kind(expected_failure),
        );
    }

    #[track_caller]
    fn verify_sequence_by<U, V, C>(
        &self,
        expected: &[V],
        comparer: C,
        expected_failure: Option<FailureKind>,
    ) where
        T: AsRef<[U]>,
        U: Debug,
        V: Debug,
        C: FnMut(&V, &U) -> bool,
    {
        let verifiers = Verifiers::standard();
        self.verify(
            verifiers.sequence_by::<T, U, V, C>(expected, comparer),
            verifiers.failure_kind(expected_failure),
        );
    }
}

/// Shorthand verifications for [`EffectOutcome`].
pub trait EffectAssertExt {
    /// Verify the failure kind, then run `result_verifier`.
    fn verify_kind<R>(&self, result_verifier: R, expected_failure: Option<FailureKind>)
    where
        R: FnOnce(&str);

    /// Verify the work completed without failing.
    fn verify_completed(&self);
}

impl EffectAssertExt for EffectOutcome {
    #[track_caller]
    fn verify_kind<R>(&self, result_verifier: R, expected_failure: Option<FailureKind>)
    where
        R: FnOnce(&str),
    {
        let verifiers = Verifiers::standard();
        self.verify(result_verifier, verifiers.failure_kind(expected_failure));
    }

    #[track_caller]
    fn verify_completed(&self) {
        self.verify_kind(|_| {}, None);
    }
}
