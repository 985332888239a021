//! Failures captured while running a unit of work.
//!
//! A unit of work fails either by panicking or, for fallible work, by
//! returning `Err`. Both end up in a [`Failure`], which keeps the raw
//! payload together with a [`FailureKind`] used for type-identity checks.

use std::any::{Any, TypeId};
use std::error::Error as StdError;
use std::fmt;

/// Marker kind for panics whose payload is a message (`&str` or `String`).
///
/// Plain `panic!("...")` calls produce this kind:
///
/// ```
/// use case_runner::{CaseRunner, FailureKind, Panicked};
///
/// let outcome = CaseRunner::new("boom").run(|| -> u8 { panic!("boom") });
/// let failure = outcome.failure().expect("work panicked");
/// assert_eq!(failure.kind(), FailureKind::of::<Panicked>());
/// assert_eq!(failure.message(), "boom");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Panicked;

const NON_STRING_PAYLOAD: &str = "panic with a non-string payload";

/// `Any` exposes no type name, so non-string panic payloads are labelled
/// with this instead.
const UNNAMED_PAYLOAD_KIND: &str = "panic payload (type name unavailable)";

/// Type identity of a captured failure.
///
/// Kinds compare by [`TypeId`] only; the stored name is informational and
/// shows up in assertion messages.
#[derive(Clone, Copy)]
pub struct FailureKind {
    id: TypeId,
    name: &'static str,
}

impl FailureKind {
    /// Kind describing failures of type `E`.
    #[must_use]
    pub fn of<E: Any>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    /// Fully qualified name of the failure type, when known.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` when this kind describes type `E`.
    #[must_use]
    pub fn is<E: Any>(&self) -> bool {
        self.id == TypeId::of::<E>()
    }
}

impl PartialEq for FailureKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FailureKind {}

impl std::hash::Hash for FailureKind {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

enum Cause {
    Error(Box<dyn StdError + Send + Sync + 'static>),
    Panic(Box<dyn Any + Send + 'static>),
}

/// A panic or error captured from a unit of work.
pub struct Failure {
    kind: FailureKind,
    message: String,
    cause: Cause,
}

impl Failure {
    /// Wrap an error returned by fallible work.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind: FailureKind::of::<E>(),
            message: error.to_string(),
            cause: Cause::Error(Box::new(error)),
        }
    }

    /// Wrap the payload of a caught panic.
    ///
    /// String payloads become the failure message and the kind
    /// [`Panicked`]. Any other payload keeps its own type as the kind, so
    /// `std::panic::panic_any(MyError)` can be matched with
    /// `FailureKind::of::<MyError>()`.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let text = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned());
        let (kind, message) = match text {
            Some(message) => (FailureKind::of::<Panicked>(), message),
            None => {
                let concrete: &dyn Any = &*payload;
                let kind = FailureKind {
                    id: concrete.type_id(),
                    name: UNNAMED_PAYLOAD_KIND,
                };
                (kind, NON_STRING_PAYLOAD.to_owned())
            }
        };
        Self {
            kind,
            message,
            cause: Cause::Panic(payload),
        }
    }

    /// Type identity of the failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns `true` when the failure is of type `E`.
    #[must_use]
    pub fn is<E: Any>(&self) -> bool {
        self.kind.is::<E>()
    }

    /// Human-readable failure text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when the work panicked rather than returning `Err`.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self.cause, Cause::Panic(_))
    }

    /// The captured error, when the work returned `Err`.
    #[must_use]
    pub fn error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match &self.cause {
            Cause::Error(err) => Some(err.as_ref()),
            Cause::Panic(_) => None,
        }
    }

    /// The raw panic payload, when the work panicked.
    #[must_use]
    pub fn panic_payload(&self) -> Option<&(dyn Any + Send + 'static)> {
        match &self.cause {
            Cause::Panic(payload) => Some(payload.as_ref()),
            Cause::Error(_) => None,
        }
    }

    /// Downcast the captured error or panic payload to `E`.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match &self.cause {
            Cause::Error(err) => err.downcast_ref::<E>(),
            Cause::Panic(payload) => payload.downcast_ref::<E>(),
        }
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("panic", &self.is_panic())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests;
