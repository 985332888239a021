//! Execute a unit of work and capture what happened.

use std::error::Error as StdError;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::{Description, EffectOutcome, Failure, Outcome};

/// Runs units of work under a shared description.
///
/// The runner holds nothing but its [`Description`], so one value can run
/// any number of units of work; each run yields an independent outcome. A
/// panic or `Err` raised by the work is captured and never propagated.
///
/// ```
/// use case_runner::{CaseRunner, Panicked};
///
/// let runner = CaseRunner::new("No.1");
/// let ok = runner.run(|| 40 + 2);
/// assert_eq!(ok.result(), Some(&42));
///
/// let boom = runner.run(|| -> i32 { panic!("boom") });
/// assert!(boom.failure().is_some_and(|f| f.is::<Panicked>()));
/// assert_eq!(boom.result_or_default(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CaseRunner {
    description: Description,
}

impl CaseRunner {
    /// Create a runner labelled with `description`.
    ///
    /// `None` is accepted and normalised to an empty description.
    #[must_use]
    pub fn new(description: impl Into<Description>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// The description attached to every outcome produced by this runner.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Run `work` and capture its value or panic.
    pub fn run<T, F>(&self, work: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        self.started();
        let captured = panic::catch_unwind(AssertUnwindSafe(work)).map_err(Failure::from_panic);
        self.outcome(captured)
    }

    /// Run fallible `work`, capturing its value, its `Err`, or its panic.
    pub fn run_fallible<T, E, F>(&self, work: F) -> Outcome<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: StdError + Send + Sync + 'static,
    {
        self.started();
        let captured = flatten(panic::catch_unwind(AssertUnwindSafe(work)));
        self.outcome(captured)
    }

    /// Run side-effect-only `work`, capturing a panic if one occurs.
    pub fn run_effect<F>(&self, work: F) -> EffectOutcome
    where
        F: FnOnce(),
    {
        self.started();
        let captured = panic::catch_unwind(AssertUnwindSafe(work)).map_err(Failure::from_panic);
        self.effect_outcome(captured)
    }

    /// Run fallible side-effect-only `work`, capturing its `Err` or panic.
    pub fn run_effect_fallible<E, F>(&self, work: F) -> EffectOutcome
    where
        F: FnOnce() -> Result<(), E>,
        E: StdError + Send + Sync + 'static,
    {
        self.started();
        let captured = flatten(panic::catch_unwind(AssertUnwindSafe(work)));
        self.effect_outcome(captured)
    }

    /// Await the future returned by `work` and capture its output or panic.
    ///
    /// The future is polled in place; nothing is spawned and no timeout is
    /// applied.
    pub async fn run_async<T, F, Fut>(&self, work: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.started();
        let captured = catch_async(work).await.map_err(Failure::from_panic);
        self.outcome(captured)
    }

    /// Await fallible asynchronous `work`, capturing its output, `Err`, or
    /// panic.
    pub async fn run_async_fallible<T, E, F, Fut>(&self, work: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: StdError + Send + Sync + 'static,
    {
        self.started();
        let captured = flatten(catch_async(work).await);
        self.outcome(captured)
    }

    /// Await side-effect-only asynchronous `work`, capturing a panic.
    pub async fn run_effect_async<F, Fut>(&self, work: F) -> EffectOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.started();
        let captured = catch_async(work).await.map_err(Failure::from_panic);
        self.effect_outcome(captured)
    }

    /// Await fallible side-effect-only asynchronous `work`, capturing its
    /// `Err` or panic.
    pub async fn run_effect_async_fallible<E, F, Fut>(&self, work: F) -> EffectOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: StdError + Send + Sync + 'static,
    {
        self.started();
        let captured = flatten(catch_async(work).await);
        self.effect_outcome(captured)
    }

    fn started(&self) {
        tracing::debug!(description = %self.description, "running case");
    }

    fn captured(&self, failure: &Failure) {
        tracing::debug!(
            description = %self.description,
            kind = %failure.kind(),
            panic = failure.is_panic(),
            "case captured failure"
        );
    }

    fn outcome<T>(&self, captured: Result<T, Failure>) -> Outcome<T> {
        if let Err(failure) = &captured {
            self.captured(failure);
        }
        Outcome::new(self.description.clone(), captured)
    }

    fn effect_outcome(&self, captured: Result<(), Failure>) -> EffectOutcome {
        let failure = captured.err();
        if let Some(captured_failure) = &failure {
            self.captured(captured_failure);
        }
        EffectOutcome::new(self.description.clone(), failure)
    }
}

type Unwound<T> = Result<T, Box<dyn std::any::Any + Send + 'static>>;

/// Calls `work` and polls its future, catching a panic from either step.
async fn catch_async<F, Fut>(work: F) -> Unwound<Fut::Output>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    AssertUnwindSafe(async move { work().await })
        .catch_unwind()
        .await
}

fn flatten<T, E>(unwound: Unwound<Result<T, E>>) -> Result<T, Failure>
where
    E: StdError + Send + Sync + 'static,
{
    unwound
        .map_err(Failure::from_panic)
        .and_then(|returned| returned.map_err(Failure::from_error))
}
