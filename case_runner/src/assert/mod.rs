//! Assertion adapter: verifiers built from "values equal" and "fail"
//! primitives.
//!
//! The core protocol in [`crate::Outcome::verify`] only needs callbacks. This
//! module turns an [`Asserter`] into ready-made callbacks ([`Verifiers`]) and
//! adds convenience methods on outcomes ([`OutcomeAssertExt`],
//! [`EffectAssertExt`]) that use the process-wide [`PanicAsserter`].
//!
//! # Examples
//!
//! ```
//! use case_runner::assert::{OutcomeAssertExt, Verifiers};
//! use case_runner::{CaseRunner, FailureKind};
//! use std::num::ParseIntError;
//!
//! let outcome = CaseRunner::new("No.2").run_fallible(|| "abc".parse::<i32>());
//! outcome.verify_kind(
//!     |_, description| panic!("{description}: no result expected"),
//!     Some(FailureKind::of::<ParseIntError>()),
//! );
//!
//! let verifiers = Verifiers::standard();
//! CaseRunner::new("No.1")
//!     .run(|| vec![1, 2, 3])
//!     .verify(
//!         verifiers.sequence::<Vec<i32>, i32>(&[1, 2, 3]),
//!         verifiers.failure_kind(None),
//!     );
//! ```

mod asserter;
mod ext;
mod verifiers;

pub use asserter::{Asserter, PanicAsserter};
pub use ext::{EffectAssertExt, OutcomeAssertExt};
pub use verifiers::Verifiers;
