//! Ready-made verifier callbacks.

use std::fmt::Debug;
use std::panic::Location;

use super::{Asserter, PanicAsserter};
use crate::{Failure, FailureKind};

/// Builds verifier callbacks on top of an [`Asserter`].
///
/// Each method returns a closure with the signature expected by
/// [`crate::Outcome::verify`] or [`crate::EffectOutcome::verify`]. The
/// closure remembers where it was built, and assertion messages name that
/// location after the description.
#[derive(Debug)]
pub struct Verifiers<'a, A> {
    asserter: &'a A,
}

impl<A> Clone for Verifiers<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Verifiers<'_, A> {}

impl Verifiers<'static, PanicAsserter> {
    /// Verifiers backed by [`PanicAsserter::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(PanicAsserter::standard())
    }
}

impl<'a, A: Asserter> Verifiers<'a, A> {
    /// Verifiers backed by `asserter`.
    #[must_use]
    pub const fn new(asserter: &'a A) -> Self {
        Self { asserter }
    }

    /// Failure verifier asserting the captured failure's kind.
    ///
    /// `None` means the work must complete without failing.
    #[track_caller]
    pub fn failure_kind(self, expected: Option<FailureKind>) -> impl FnOnce(Option<&Failure>, &str) {
        let location = Location::caller();
        move |failure, description| {
            let actual = failure.map(Failure::kind);
            if actual != expected
                && let Some(captured) = failure
            {
                self.asserter.report_unexpected(captured, description);
            }
            self.asserter
                .assert_equal(&expected, &actual, &located(description, location));
        }
    }

    /// Result verifier asserting the value equals `expected`.
    #[track_caller]
    pub fn value<T>(self, expected: &T) -> impl FnOnce(&T, &str)
    where
        T: PartialEq + Debug,
    {
        let location = Location::caller();
        move |actual, description| {
            self.asserter
                .assert_equal(expected, actual, &located(description, location));
        }
    }

    /// Result verifier asserting the value's elements equal `expected`.
    #[track_caller]
    pub fn sequence<T, U>(self, expected: &[U]) -> impl FnOnce(&T, &str)
    where
        T: AsRef<[U]>,
        U: PartialEq + Debug,
    {
        let location = Location::caller();
        move |actual, description| {
            self.asserter.assert_sequence_equal_by(
                expected,
                actual.as_ref(),
                |want, got| want == got,
                &located(description, location),
            );
        }
    }

    /// Result verifier comparing elements with `comparer`.
    #[track_caller]
    pub fn sequence_by<T, U, V, C>(self, expected: &[V], comparer: C) -> impl FnOnce(&T, &str)
    where
        T: AsRef<[U]>,
        U: Debug,
        V: Debug,
        C: FnMut(&V, &U) -> bool,
    {
        let location = Location::caller();
        move |actual, description| {
            self.asserter.assert_sequence_equal_by(
                expected,
                actual.as_ref(),
                comparer,
                &located(description, location),
            );
        }
    }
}

fn located(description: &str, location: &Location<'_>) -> String {
    format!("{description} (verified at {location})")
}
