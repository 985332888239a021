//! Step-by-step verification where either verifier may be left out.
//!
//! [`Outcome::verify`] takes both verifiers as arguments, so neither can be
//! missing. These builders are for call sites that assemble verifiers
//! conditionally; a missing verifier is reported as
//! [`CaseError::MissingVerifier`] before anything runs.

use super::{EffectOutcome, Outcome, run_phases};
use crate::{CaseError, CaseResult, Failure, VerifierRole};

type ResultVerifier<'a, T> = Box<dyn FnOnce(&T, &str) + 'a>;
type EffectResultVerifier<'a> = Box<dyn FnOnce(&str) + 'a>;
type FailureVerifier<'a> = Box<dyn FnOnce(Option<&Failure>, &str) + 'a>;

fn require<V>(verifier: Option<V>, role: VerifierRole) -> CaseResult<V> {
    verifier.ok_or_else(|| CaseError::missing_verifier(role))
}

/// Pending verification of an [`Outcome`].
///
/// ```
/// use case_runner::{CaseError, CaseRunner, VerifierRole};
///
/// let outcome = CaseRunner::new("No.0").run(|| 1);
/// let err = outcome
///     .verification()
///     .on_result(|_, _| {})
///     .verify()
///     .expect_err("failure verifier missing");
/// assert!(matches!(
///     err,
///     CaseError::MissingVerifier { role: VerifierRole::Failure }
/// ));
/// ```
#[must_use = "call `verify` to run the verifiers"]
pub struct Verification<'a, T> {
    outcome: &'a Outcome<T>,
    on_result: Option<ResultVerifier<'a, T>>,
    on_failure: Option<FailureVerifier<'a>>,
}

impl<'a, T> Verification<'a, T> {
    pub(super) const fn new(outcome: &'a Outcome<T>) -> Self {
        Self {
            outcome,
            on_result: None,
            on_failure: None,
        }
    }

    /// Set the verifier for the returned value.
    pub fn on_result<R>(mut self, verifier: R) -> Self
    where
        R: FnOnce(&T, &str) + 'a,
    {
        self.on_result = Some(Box::new(verifier));
        self
    }

    /// Set the verifier for the captured failure.
    pub fn on_failure<V>(mut self, verifier: V) -> Self
    where
        V: FnOnce(Option<&Failure>, &str) + 'a,
    {
        self.on_failure = Some(Box::new(verifier));
        self
    }

    /// Run both phases.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::MissingVerifier`] without invoking either
    /// verifier when one of them was not supplied.
    pub fn verify(self) -> CaseResult<()> {
        let on_result = require(self.on_result, VerifierRole::Result)?;
        let on_failure = require(self.on_failure, VerifierRole::Failure)?;
        self.outcome.verify(on_result, on_failure);
        Ok(())
    }
}

/// Pending verification of an [`EffectOutcome`].
#[must_use = "call `verify` to run the verifiers"]
pub struct EffectVerification<'a> {
    outcome: &'a EffectOutcome,
    on_result: Option<EffectResultVerifier<'a>>,
    on_failure: Option<FailureVerifier<'a>>,
}

impl<'a> EffectVerification<'a> {
    pub(super) const fn new(outcome: &'a EffectOutcome) -> Self {
        Self {
            outcome,
            on_result: None,
            on_failure: None,
        }
    }

    /// Set the verifier for normal completion.
    pub fn on_result<R>(mut self, verifier: R) -> Self
    where
        R: FnOnce(&str) + 'a,
    {
        self.on_result = Some(Box::new(verifier));
        self
    }

    /// Set the verifier for the captured failure.
    pub fn on_failure<V>(mut self, verifier: V) -> Self
    where
        V: FnOnce(Option<&Failure>, &str) + 'a,
    {
        self.on_failure = Some(Box::new(verifier));
        self
    }

    /// Run both phases.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::MissingVerifier`] without invoking either
    /// verifier when one of them was not supplied.
    pub fn verify(self) -> CaseResult<()> {
        let on_result = require(self.on_result, VerifierRole::Result)?;
        let on_failure = require(self.on_failure, VerifierRole::Failure)?;
        run_phases(
            self.outcome.description(),
            self.outcome.failure(),
            on_failure,
            on_result,
        );
        Ok(())
    }
}
