//! The comparison and failure primitives verifiers are built from.

use std::fmt::Debug;
use std::sync::LazyLock;

use crate::{CaseConfig, Failure};

static STANDARD: LazyLock<PanicAsserter> = LazyLock::new(PanicAsserter::from_env);

/// Source of assertion primitives.
///
/// Implementations signal a failed assertion by diverging, normally by
/// panicking the way the standard `assert_eq!` macro does.
pub trait Asserter {
    /// Fail with `message` unless `expected` equals `actual`.
    fn assert_equal<T>(&self, expected: &T, actual: &T, message: &str)
    where
        T: PartialEq + Debug + ?Sized;

    /// Fail unconditionally with `message`.
    fn fail(&self, message: &str) -> !;

    /// Called with a captured failure just before an expected-kind mismatch
    /// is asserted. The default does nothing.
    fn report_unexpected(&self, _failure: &Failure, _description: &str) {}

    /// Fail with `message` unless both slices have the same length and
    /// `comparer` accepts every pair of elements.
    fn assert_sequence_equal_by<E, A, C>(
        &self,
        expected: &[E],
        actual: &[A],
        mut comparer: C,
        message: &str,
    ) where
        E: Debug,
        A: Debug,
        C: FnMut(&E, &A) -> bool,
    {
        if expected.len() != actual.len() {
            self.fail(&format!(
                "{message}\n  sequence lengths differ: expected {}, found {}\n  expected: {expected:?}\n    actual: {actual:?}",
                expected.len(),
                actual.len(),
            ));
        }
        if let Some(index) = expected
            .iter()
            .zip(actual)
            .position(|(want, got)| !comparer(want, got))
        {
            self.fail(&format!(
                "{message}\n  sequences differ at index {index}\n  expected: {expected:?}\n    actual: {actual:?}"
            ));
        }
    }
}

/// Asserter that panics on mismatch, for use with the standard test harness.
///
/// Messages start with the verifier's description, followed by the expected
/// and actual values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanicAsserter {
    config: CaseConfig,
}

impl PanicAsserter {
    /// Create an asserter with explicit settings.
    #[must_use]
    pub const fn new(config: CaseConfig) -> Self {
        Self { config }
    }

    /// Create an asserter from [`CaseConfig::load`], using defaults when the
    /// configuration cannot be read.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CaseConfig::load_or_default())
    }

    /// The shared asserter used by the convenience extension traits.
    ///
    /// Configuration is read once, on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Settings this asserter was built with.
    #[must_use]
    pub const fn config(&self) -> &CaseConfig {
        &self.config
    }
}

impl Asserter for PanicAsserter {
    #[track_caller]
    fn assert_equal<T>(&self, expected: &T, actual: &T, message: &str)
    where
        T: PartialEq + Debug + ?Sized,
    {
        if expected != actual {
            self.fail(&format!(
                "{message}\n  expected: {expected:?}\n    actual: {actual:?}"
            ));
        }
    }

    #[track_caller]
    fn fail(&self, message: &str) -> ! {
        panic!("{message}")
    }

    fn report_unexpected(&self, failure: &Failure, description: &str) {
        if self.config.echo_failures {
            tracing::error!(
                description,
                kind = %failure.kind(),
                failure = %failure,
                "captured failure does not match the expected kind"
            );
        }
    }
}
