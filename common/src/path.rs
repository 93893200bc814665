//! Dotted names such as `java.lang.String`.

use std::fmt;

/// A qualified type or annotation name.
///
/// The name is kept in normalised dotted form: empty segments left by
/// leading, trailing or doubled separators are dropped on construction, so
/// two names compare equal exactly when their segments do.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    dotted: String,
}

fn segments_of(name: &str) -> impl Iterator<Item = &str> {
    name.split('.').filter(|segment| !segment.is_empty())
}

impl QualifiedName {
    /// Parses a dotted name.
    ///
    /// ```
    /// use bindcheck_common::path::QualifiedName;
    ///
    /// let compact = QualifiedName::parse(".java..lang.Object");
    /// assert_eq!(compact.as_str(), "java.lang.Object");
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self {
            dotted: segments_of(name).collect::<Vec<_>>().join("."),
        }
    }

    /// The normalised dotted form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.dotted
    }

    /// Iterates over the name's segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        segments_of(&self.dotted)
    }

    /// The last segment, or `None` for an empty name.
    #[must_use]
    pub fn simple_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Returns `true` when `dotted` names the same element once normalised.
    ///
    /// ```
    /// use bindcheck_common::path::QualifiedName;
    ///
    /// let name = QualifiedName::parse("java.lang.Object");
    /// assert!(name.is("java.lang.Object."));
    /// assert!(!name.is("java.lang.String"));
    /// ```
    #[must_use]
    pub fn is(&self, dotted: &str) -> bool {
        self.segments().eq(segments_of(dotted))
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("java.util.List", "java.util.List")]
    #[case::stray_separators("..java..util.List.", "java.util.List")]
    #[case::empty("...", "")]
    fn normalises_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(QualifiedName::parse(input).as_str(), expected);
    }

    #[rstest]
    fn equal_after_normalisation() {
        assert_eq!(
            QualifiedName::from("javax.inject.Qualifier"),
            QualifiedName::from(String::from(".javax.inject..Qualifier"))
        );
    }

    #[rstest]
    fn segments_run_outermost_first() {
        let name = QualifiedName::parse("dagger.producers.ProducerModule");

        assert_eq!(
            name.segments().collect::<Vec<_>>(),
            ["dagger", "producers", "ProducerModule"]
        );
    }

    #[rstest]
    #[case::nested("dagger.producers.ProducerModule", Some("ProducerModule"))]
    #[case::bare("T", Some("T"))]
    #[case::empty("", None)]
    fn reports_simple_name(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(QualifiedName::parse(input).simple_name(), expected);
    }

    #[rstest]
    #[case::same("javax.inject.Named", true)]
    #[case::prefix("javax.inject", false)]
    #[case::longer("javax.inject.Named.Inner", false)]
    fn compares_against_dotted_text(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(
            QualifiedName::parse("javax.inject.Named").is(candidate),
            expected
        );
    }
}
