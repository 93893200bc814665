//! Step parameter parsing shared by the behaviour suites.

use std::convert::Infallible;
use std::str::FromStr;

/// A step parameter with surrounding whitespace and quotes removed.
///
/// Feature files quote values that would otherwise be ambiguous, such as
/// blank locales (`"   "`), so steps parse through this wrapper rather than
/// taking `String` directly.
#[derive(Clone, Debug)]
pub struct StepValue(String);

impl FromStr for StepValue {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''));

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for StepValue {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl StepValue {
    /// Consumes the step value, yielding the parsed string.
    pub fn into_inner(self) -> String {
        self.0
    }
}
