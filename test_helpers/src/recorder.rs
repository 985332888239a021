//! Thread-safe log of verifier invocations.
//!
//! # Examples
//!
//! ```
//! use case_runner_test_helpers::recorder::{CallRecorder, FAILURE, RESULT};
//!
//! let rec = CallRecorder::new();
//! rec.record(FAILURE, "No.1", None::<()>);
//! rec.record(RESULT, "No.1", 123);
//! assert_eq!(rec.roles(), vec![FAILURE, RESULT]);
//! assert_eq!(rec.count(RESULT), 1);
//! ```

use std::fmt;

use parking_lot::Mutex;

/// Role recorded for result verifiers.
pub const RESULT: &str = "result";

/// Role recorded for failure verifiers.
pub const FAILURE: &str = "failure";

/// One recorded verifier invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Which verifier ran, usually [`RESULT`] or [`FAILURE`].
    pub role: &'static str,
    /// Description passed to the verifier.
    pub description: String,
    /// `Debug` rendering of the value the verifier received.
    pub detail: String,
}

/// Collects [`Call`]s in invocation order.
#[derive(Debug, Default)]
pub struct CallRecorder {
    calls: Mutex<Vec<Call>>,
}

impl CallRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an invocation of `role` with `description` and `detail`.
    pub fn record(&self, role: &'static str, description: &str, detail: impl fmt::Debug) {
        self.calls.lock().push(Call {
            role,
            description: description.to_owned(),
            detail: format!("{detail:?}"),
        });
    }

    /// Snapshot of every recorded call.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Roles in invocation order.
    #[must_use]
    pub fn roles(&self) -> Vec<&'static str> {
        self.calls.lock().iter().map(|call| call.role).collect()
    }

    /// Number of recorded calls for `role`.
    #[must_use]
    pub fn count(&self, role: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.role == role)
            .count()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{CallRecorder, FAILURE, RESULT};

    #[test]
    fn keeps_invocation_order() {
        let rec = CallRecorder::new();
        rec.record(FAILURE, "desc", None::<u8>);
        rec.record(RESULT, "desc", 5);
        let calls = rec.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls.first().map(|c| c.detail.as_str()), Some("None"));
        assert_eq!(calls.get(1).map(|c| c.detail.as_str()), Some("5"));
    }

    #[test]
    fn clear_forgets_calls() {
        let rec = CallRecorder::new();
        rec.record(RESULT, "desc", ());
        rec.clear();
        assert!(rec.calls().is_empty());
        assert_eq!(rec.count(RESULT), 0);
    }
}
