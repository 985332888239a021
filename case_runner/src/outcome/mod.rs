//! Immutable records of what a unit of work did, and the two-phase
//! verification protocol shared by both record shapes.
//!
//! Verification always invokes the failure verifier first, whether or not a
//! failure was captured. The result verifier runs afterwards only when the
//! work completed without failing; a captured failure means there is no
//! result to inspect.

mod builder;

pub use builder::{EffectVerification, Verification};

use crate::{Description, Failure};

/// Runs the verification phases against a captured failure.
///
/// `result_phase` is only invoked when `failure` is `None`.
pub(crate) fn run_phases<V, R>(
    description: &str,
    failure: Option<&Failure>,
    failure_verifier: V,
    result_phase: R,
) where
    V: FnOnce(Option<&Failure>, &str),
    R: FnOnce(&str),
{
    tracing::trace!(description, failed = failure.is_some(), "verifying failure");
    failure_verifier(failure, description);
    if failure.is_none() {
        tracing::trace!(description, "verifying result");
        result_phase(description);
    }
}

/// Captured outcome of a value-producing unit of work.
#[derive(Debug)]
pub struct Outcome<T> {
    description: Description,
    captured: Result<T, Failure>,
}

impl<T> Outcome<T> {
    pub(crate) const fn new(description: Description, captured: Result<T, Failure>) -> Self {
        Self {
            description,
            captured,
        }
    }

    /// Description of the runner that produced this outcome.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// The captured failure, or `None` when the work completed normally.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        self.captured.as_ref().err()
    }

    /// The value returned by the work, or `None` when a failure was captured.
    #[must_use]
    pub fn result(&self) -> Option<&T> {
        self.captured.as_ref().ok()
    }

    /// Returns `true` when no failure was captured.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.captured.is_ok()
    }

    /// The returned value, or `T::default()` when a failure was captured.
    #[must_use]
    pub fn result_or_default(&self) -> T
    where
        T: Default + Clone,
    {
        self.result().cloned().unwrap_or_default()
    }

    /// Consume the outcome, yielding the value or the failure.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] when the work did not complete.
    pub fn into_result(self) -> Result<T, Failure> {
        self.captured
    }

    /// Verify the outcome in two phases.
    ///
    /// `failure_verifier` is always called with the captured failure (or
    /// `None`) and the description. `result_verifier` is called with the
    /// value and the description only when no failure was captured.
    ///
    /// ```
    /// use case_runner::CaseRunner;
    ///
    /// CaseRunner::new("No.1").run(|| 7).verify(
    ///     |value, description| assert_eq!(*value, 7, "{description}"),
    ///     |failure, description| assert!(failure.is_none(), "{description}"),
    /// );
    /// ```
    pub fn verify<R, V>(&self, result_verifier: R, failure_verifier: V)
    where
        R: FnOnce(&T, &str),
        V: FnOnce(Option<&Failure>, &str),
    {
        run_phases(
            self.description(),
            self.failure(),
            failure_verifier,
            |description| {
                if let Ok(value) = &self.captured {
                    result_verifier(value, description);
                }
            },
        );
    }

    /// Start a verification whose verifiers are supplied one at a time.
    pub const fn verification(&self) -> Verification<'_, T> {
        Verification::new(self)
    }
}

/// Captured outcome of a side-effect-only unit of work.
#[derive(Debug)]
pub struct EffectOutcome {
    description: Description,
    failure: Option<Failure>,
}

impl EffectOutcome {
    pub(crate) const fn new(description: Description, failure: Option<Failure>) -> Self {
        Self {
            description,
            failure,
        }
    }

    /// Description of the runner that produced this outcome.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// The captured failure, or `None` when the work completed normally.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Returns `true` when no failure was captured.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Consume the outcome, yielding the captured failure if any.
    #[must_use]
    pub fn into_failure(self) -> Option<Failure> {
        self.failure
    }

    /// Verify the outcome in two phases.
    ///
    /// `failure_verifier` is always called; `result_verifier` receives only
    /// the description and runs only when no failure was captured.
    pub fn verify<R, V>(&self, result_verifier: R, failure_verifier: V)
    where
        R: FnOnce(&str),
        V: FnOnce(Option<&Failure>, &str),
    {
        run_phases(
            self.description(),
            self.failure(),
            failure_verifier,
            result_verifier,
        );
    }

    /// Start a verification whose verifiers are supplied one at a time.
    pub const fn verification(&self) -> EffectVerification<'_> {
        EffectVerification::new(self)
    }
}

#[cfg(test)]
mod tests;
