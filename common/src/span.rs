//! Source positions and the location hints diagnostics attach to.
//!
//! Hosts that know where a declaration came from record spans on the method,
//! its parameters and its annotations. Diagnostics never carry spans
//! themselves; they carry a [`LocationHint`] that
//! [`Declaration::span_for`](crate::declaration::Declaration::span_for)
//! turns back into a span.

use std::fmt;

/// Errors produced when constructing spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanError {
    /// The start position follows the end position.
    StartAfterEnd,
}

/// A one-based line and column.
///
/// Locations order by line, then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    line: usize,
    column: usize,
}

impl SourceLocation {
    /// Builds a location.
    ///
    /// ```
    /// use bindcheck_common::span::SourceLocation;
    ///
    /// let location = SourceLocation::new(3, 5);
    /// assert_eq!(location.to_string(), "3:5");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the one-based line number.
    #[must_use]
    pub const fn line(self) -> usize {
        self.line
    }

    /// Returns the one-based column number.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A region of source text between two locations, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    start: SourceLocation,
    end: SourceLocation,
}

impl SourceSpan {
    /// Builds a span covering `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::StartAfterEnd`] when `start` follows `end`.
    pub fn new(start: SourceLocation, end: SourceLocation) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::StartAfterEnd);
        }
        Ok(Self { start, end })
    }

    /// A span that starts and ends at `location`.
    #[must_use]
    pub const fn point(location: SourceLocation) -> Self {
        Self {
            start: location,
            end: location,
        }
    }

    #[must_use]
    pub const fn start(self) -> SourceLocation {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> SourceLocation {
        self.end
    }

    /// Returns `true` when `location` falls inside the span.
    #[must_use]
    pub fn contains(self, location: SourceLocation) -> bool {
        self.start <= location && location <= self.end
    }
}

/// Spans display as their start position.
impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start.fmt(f)
    }
}

/// Points a diagnostic at one element of the validated declaration.
///
/// Indices refer to positions in the declaration's parameter and annotation
/// lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationHint {
    /// The method declaration as a whole.
    Method,
    /// The parameter at `index`.
    Parameter {
        /// Zero-based parameter position.
        index: usize,
    },
    /// The annotation occurrence at `index`.
    Annotation {
        /// Zero-based position in the declaration's annotation list.
        index: usize,
    },
}

impl fmt::Display for LocationHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method => f.write_str("method"),
            Self::Parameter { index } => write!(f, "parameter {index}"),
            Self::Annotation { index } => write!(f, "annotation {index}"),
        }
    }
}
