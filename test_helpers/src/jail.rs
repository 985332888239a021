//! Helpers for running configuration tests inside `figment::Jail`.
//!
//! A jail gives each test a scratch working directory and restores any
//! environment variables it sets, which is what configuration tests for the
//! `CASE_RUNNER_` prefix need.

use anyhow::{Context, Result, anyhow};

/// Runs `setup` inside a [`figment::Jail`] and hands back whatever it
/// produced.
///
/// `setup` reports its own failures as [`anyhow::Error`], so configuration
/// errors from the crate under test pass through untouched. Only a failure
/// to build or tear down the jail itself is wrapped here.
///
/// # Errors
///
/// Returns the error produced by `setup`, or an error when the jail cannot
/// be created.
#[expect(
    clippy::result_large_err,
    reason = "figment::Jail::try_with fixes the closure's error type"
)]
pub fn with_jail<F, T>(setup: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> Result<T>,
{
    let mut produced = None;
    figment::Jail::try_with(|jail| {
        produced = Some(setup(jail));
        Ok(())
    })
    .context("figment jail could not be prepared")?;
    produced.unwrap_or_else(|| Err(anyhow!("jail exited before running the setup closure")))
}
