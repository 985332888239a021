//! Usage errors reported by the runner, the verification builders, and the
//! configuration loader.
//!
//! Failures raised by the code under test are never reported here; they are
//! captured as [`crate::Failure`] values instead.

mod constructors;
mod conversions;
mod types;

pub use types::{CaseError, VerifierRole};

/// Convenience alias for results carrying a [`CaseError`].
pub type CaseResult<T> = Result<T, CaseError>;

#[cfg(test)]
mod tests;
