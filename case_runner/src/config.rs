//! Runtime configuration for the standard assertion adapter.
//!
//! Values are layered with Figment: built-in defaults, then an optional
//! [`CONFIG_FILE`] in the working directory (with the `toml` feature), then
//! environment variables prefixed with [`ENV_PREFIX`].

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "toml")]
use figment::providers::{Format, Toml};

use crate::{CaseError, CaseResult};

/// Prefix for environment variables read by [`CaseConfig::load`].
pub const ENV_PREFIX: &str = "CASE_RUNNER_";

/// Name of the optional TOML file read by [`CaseConfig::load`].
pub const CONFIG_FILE: &str = "case_runner.toml";

/// Settings shared by every verification that uses the standard asserter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    /// Log the captured failure through `tracing` when it does not match the
    /// expected kind.
    pub echo_failures: bool,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            echo_failures: true,
        }
    }
}

impl CaseConfig {
    /// Load configuration from defaults, [`CONFIG_FILE`] and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Config`] when a source holds a value that cannot
    /// be deserialised.
    pub fn load() -> CaseResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Extract configuration from a caller-assembled [`Figment`].
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Config`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> CaseResult<Self> {
        figment.extract().map_err(CaseError::config)
    }

    /// The default provider stack used by [`CaseConfig::load`].
    #[must_use]
    pub fn figment() -> Figment {
        let mut fig = Figment::from(Serialized::defaults(Self::default()));
        #[cfg(feature = "toml")]
        {
            fig = fig.merge(Toml::file(CONFIG_FILE));
        }
        fig.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration, falling back to defaults when loading fails.
    pub(crate) fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default case runner configuration");
            Self::default()
        })
    }
}
