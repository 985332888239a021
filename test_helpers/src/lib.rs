//! Test helpers shared across crates in the workspace.
//!
//! - [`recorder`] logs verifier invocations so tests can assert which phases
//!   ran, in what order, and with which description.
//! - [`fixtures`] holds the units of work exercised by end-to-end scenarios.
//! - [`jail`] wraps `figment::Jail` for configuration tests.

pub mod fixtures;
pub mod jail;
pub mod recorder;
