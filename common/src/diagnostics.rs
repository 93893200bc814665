//! Ergonomic builders for validation diagnostics.

use std::fmt;

use crate::span::LocationHint;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The declaration is rejected.
    Error,
    /// The declaration is accepted but suspicious.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Represents a diagnostic with optional notes and help messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    code: String,
    severity: Severity,
    message: String,
    location: LocationHint,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl Diagnostic {
    /// Returns the rule code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the primary message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the declaration element the diagnostic points at.
    #[must_use]
    pub const fn location(&self) -> LocationHint {
        self.location
    }

    /// Returns additional diagnostic notes.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Returns help messages.
    #[must_use]
    pub fn helps(&self) -> &[String] {
        &self.helps
    }
}

/// Builder for [`Diagnostic`] instances.
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    fn new(
        code: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        location: LocationHint,
    ) -> Self {
        Self {
            diagnostic: Diagnostic {
                code: code.into(),
                severity,
                message: message.into(),
                location,
                notes: Vec::new(),
                helps: Vec::new(),
            },
        }
    }

    /// Adds a note to the diagnostic.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Adds a help message to the diagnostic.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Completes the builder and returns the diagnostic.
    #[must_use]
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}

/// Starts building an error diagnostic for a declaration element.
///
/// # Examples
///
/// ```
/// use bindcheck_common::diagnostics::{error_at, Severity};
/// use bindcheck_common::span::LocationHint;
///
/// let diagnostic = error_at("demo", "Example", LocationHint::Parameter { index: 0 })
///     .help("Consider refactoring")
///     .build();
/// assert_eq!(diagnostic.code(), "demo");
/// assert_eq!(diagnostic.severity(), Severity::Error);
/// ```
#[must_use]
pub fn error_at(
    code: impl Into<String>,
    message: impl Into<String>,
    location: LocationHint,
) -> DiagnosticBuilder {
    DiagnosticBuilder::new(code, Severity::Error, message, location)
}

/// Starts building a warning diagnostic for a declaration element.
#[must_use]
pub fn warning_at(
    code: impl Into<String>,
    message: impl Into<String>,
    location: LocationHint,
) -> DiagnosticBuilder {
    DiagnosticBuilder::new(code, Severity::Warning, message, location)
}

/// Receives diagnostics as validators produce them.
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
