//! Human-readable labels attached to test cases.

use std::fmt;
use std::ops::Deref;

/// Label surfaced in every verifier call and failure message.
///
/// An absent description normalises to the empty string, so callers never
/// have to special-case `None`.
///
/// ```
/// use case_runner::Description;
///
/// assert_eq!(Description::from(None::<&str>).as_str(), "");
/// assert_eq!(Description::from(Some("No.1")).as_str(), "No.1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Description(String);

impl Description {
    /// Borrow the description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the description and return the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Description {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Description {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Description {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&String> for Description {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl<S> From<Option<S>> for Description
where
    S: Into<Self>,
{
    fn from(value: Option<S>) -> Self {
        value.map_or_else(Self::default, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Description;
    use rstest::rstest;

    #[rstest]
    #[case(None, "")]
    #[case(Some(""), "")]
    #[case(Some("  "), "  ")]
    #[case(Some("foo"), "foo")]
    fn normalises_optional_text(#[case] input: Option<&str>, #[case] expected: &str) {
        assert_eq!(Description::from(input).as_str(), expected);
    }

    #[test]
    fn displays_raw_text() {
        let description = Description::from(String::from("No.10"));
        assert_eq!(description.to_string(), "No.10");
        assert_eq!(&*description, "No.10");
    }
}
