//! Conversions between `figment::Error` and `CaseError`.

use figment::Error as FigmentError;

use super::CaseError;

impl From<FigmentError> for CaseError {
    fn from(e: FigmentError) -> Self {
        Self::config(e)
    }
}

impl From<CaseError> for FigmentError {
    /// Allow using `?` in tests that run inside `figment::Jail`.
    fn from(e: CaseError) -> Self {
        match e {
            CaseError::Config(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
