//! Faults raised when the validator cannot answer a rule.

use bindcheck_common::types::LookupError;
use thiserror::Error;

/// A declaration could not be validated because a capability failed.
///
/// This signals a caller that handed over unresolved data. It is never
/// reported as a diagnostic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A capability lookup failed while evaluating a rule.
    #[error("cannot validate `{declaration}`: {source}")]
    Lookup {
        /// Display name of the declaration being validated.
        declaration: String,
        /// The failed lookup.
        #[source]
        source: LookupError,
    },
}

impl ValidationError {
    /// Returns the display name of the declaration that failed.
    #[must_use]
    pub fn declaration(&self) -> &str {
        match self {
            Self::Lookup { declaration, .. } => declaration,
        }
    }
}
