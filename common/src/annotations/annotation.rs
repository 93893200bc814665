//! Annotation occurrence metadata.

use std::fmt;

use crate::path::QualifiedName;
use crate::span::SourceSpan;

/// A single annotation written on a declaration, such as `@Named`.
///
/// Whether the annotation is a qualifier is not stored here: that fact lives
/// on the annotation's own declaration and is answered by a
/// [`QualifierClassifier`](crate::types::QualifierClassifier).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationUse {
    name: QualifiedName,
    span: Option<SourceSpan>,
}

impl AnnotationUse {
    /// Creates an annotation occurrence for the annotation type `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::annotations::AnnotationUse;
    ///
    /// let named = AnnotationUse::new("javax.inject.Named");
    /// assert_eq!(named.simple_name(), "Named");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            span: None,
        }
    }

    /// Attaches the source span of the occurrence.
    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the qualified name of the annotation type.
    #[must_use]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns the simple name of the annotation type.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.simple_name().unwrap_or_default()
    }

    /// Returns the source span, when the builder recorded one.
    #[must_use]
    pub const fn span(&self) -> Option<SourceSpan> {
        self.span
    }

    /// Returns `true` when the occurrence names the annotation type `dotted`.
    #[must_use]
    pub fn is(&self, dotted: &str) -> bool {
        self.name.is(dotted)
    }
}

impl fmt::Display for AnnotationUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.simple_name())
    }
}
