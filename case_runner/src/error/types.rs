//! Primary error enum for usage failures.

use std::fmt;

use figment::Error as FigmentError;
use thiserror::Error;

/// Which of the two verifiers a usage error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifierRole {
    /// Verifier for the value (or bare completion) of the work.
    Result,
    /// Verifier for the captured failure, invoked on every verification.
    Failure,
}

impl fmt::Display for VerifierRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Result => "result",
            Self::Failure => "failure",
        })
    }
}

/// Errors caused by calling the library incorrectly or by bad configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CaseError {
    /// A verification was started without one of its verifiers.
    #[error("missing {role} verifier")]
    MissingVerifier {
        /// The verifier that was not supplied.
        role: VerifierRole,
    },

    /// Configuration could not be gathered or deserialised.
    #[error("Failed to load case runner configuration: {0}")]
    Config(#[from] Box<FigmentError>),
}
