//! Configuration layering for the standard asserter.

use anyhow::ensure;
use case_runner::{CONFIG_FILE, CaseConfig, CaseError};
use test_helpers::jail::with_jail;

#[test]
fn defaults_echo_failures() -> anyhow::Result<()> {
    let config = with_jail(|_| Ok(CaseConfig::load()?))?;
    ensure!(config == CaseConfig::default(), "unexpected config {config:?}");
    ensure!(config.echo_failures);
    Ok(())
}

#[test]
fn environment_overrides_defaults() -> anyhow::Result<()> {
    let config = with_jail(|jail| {
        jail.set_env("CASE_RUNNER_ECHO_FAILURES", "false");
        Ok(CaseConfig::load()?)
    })?;
    ensure!(!config.echo_failures, "env should disable echoing");
    Ok(())
}

#[test]
fn file_is_read_from_working_directory() -> anyhow::Result<()> {
    let config = with_jail(|jail| {
        jail.create_file(CONFIG_FILE, "echo_failures = false")?;
        Ok(CaseConfig::load()?)
    })?;
    ensure!(!config.echo_failures, "{CONFIG_FILE} should disable echoing");
    Ok(())
}

#[test]
fn environment_wins_over_file() -> anyhow::Result<()> {
    let config = with_jail(|jail| {
        jail.create_file(CONFIG_FILE, "echo_failures = false")?;
        jail.set_env("CASE_RUNNER_ECHO_FAILURES", "true");
        Ok(CaseConfig::load()?)
    })?;
    ensure!(config.echo_failures, "env should override {CONFIG_FILE}");
    Ok(())
}

#[test]
fn invalid_value_is_a_config_error() -> anyhow::Result<()> {
    let err = with_jail(|jail| {
        jail.set_env("CASE_RUNNER_ECHO_FAILURES", "sometimes");
        Ok(CaseConfig::load().err())
    })?;
    ensure!(
        matches!(err, Some(CaseError::Config(_))),
        "expected a config error, got {err:?}"
    );
    Ok(())
}
