//! Error types for the `bindcheck` command.
//!
//! Rule violations are never errors: they are reported as diagnostics. These
//! variants cover the faults that stop a check from running at all.

use bindcheck_common::declaration::DeclarationError;
use binds_method::ValidationError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Faults raised while loading inputs or producing a report.
#[derive(Debug, Error)]
pub enum BindcheckError {
    /// A configuration or manifest file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file did not contain valid TOML for its schema.
    #[error("invalid TOML in {path}: {reason}")]
    InvalidToml {
        /// Path to the offending file.
        path: Utf8PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A type expression in the manifest could not be parsed.
    #[error("invalid type expression `{text}`: {reason}")]
    TypeExpression {
        /// The expression as written.
        text: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A manifest method did not describe a complete declaration.
    #[error("invalid declaration in {module}")]
    Declaration {
        /// Enclosing type named in the manifest.
        module: String,
        /// The builder failure.
        #[source]
        source: DeclarationError,
    },

    /// The validator could not answer a rule for a declaration.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The report could not be serialised.
    #[error("failed to serialise report")]
    Serialise {
        /// The underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },

    /// The report could not be written.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for `bindcheck` operations.
pub type Result<T> = std::result::Result<T, BindcheckError>;
