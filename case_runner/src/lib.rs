//! Core crate for capturing and verifying the outcome of code under test.
//!
//! A [`CaseRunner`] executes a unit of work exactly once and records what
//! happened in an immutable [`Outcome`] (or [`EffectOutcome`] when the work
//! produces no value). Panics and `Err` returns never escape the runner; they
//! are stored as a [`Failure`] for later inspection.
//!
//! Verification always runs in two phases: the failure verifier sees the
//! captured failure (or `None`) first, and the result verifier runs only when
//! the work completed without failing.
//!
//! ```
//! use case_runner::{CaseRunner, FailureKind};
//! use case_runner::assert::OutcomeAssertExt;
//! use std::num::ParseIntError;
//!
//! CaseRunner::new("parses digits")
//!     .run_fallible(|| "123".parse::<i32>())
//!     .verify_value(&123, None);
//!
//! CaseRunner::new("rejects letters")
//!     .run_fallible(|| "abc".parse::<i32>())
//!     .verify_value(&0, Some(FailureKind::of::<ParseIntError>()));
//! ```

pub mod assert;
mod config;
mod description;
mod error;
mod failure;
mod outcome;
mod runner;

pub use config::{CONFIG_FILE, CaseConfig, ENV_PREFIX};
pub use description::Description;
pub use error::{CaseError, CaseResult, VerifierRole};
pub use failure::{Failure, FailureKind, Panicked};
pub use outcome::{EffectOutcome, EffectVerification, Outcome, Verification};
pub use runner::CaseRunner;
