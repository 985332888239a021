//! Constructors for `CaseError`.

use figment::Error as FigmentError;

use super::{CaseError, VerifierRole};

impl CaseError {
    /// Construct a missing-verifier error for `role`.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_runner::{CaseError, VerifierRole};
    /// let e = CaseError::missing_verifier(VerifierRole::Failure);
    /// assert_eq!(e.to_string(), "missing failure verifier");
    /// ```
    #[must_use]
    pub const fn missing_verifier(role: VerifierRole) -> Self {
        Self::MissingVerifier { role }
    }

    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use case_runner::CaseError;
    /// let e = CaseError::config(figment::Error::from("boom"));
    /// assert!(matches!(e, CaseError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }
}
