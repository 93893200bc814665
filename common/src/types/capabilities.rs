//! Capability traits answering type-level questions for validators.

use thiserror::Error;

use super::{TypeRef, TypeScope};
use crate::annotations::AnnotationUse;

/// Raised when a capability cannot answer a query because the input refers to
/// something the type universe does not know.
///
/// Declaration builders are expected to resolve every type and annotation
/// before validation, so a lookup failure signals a caller bug rather than a
/// user error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// A declared type name is not part of the type universe.
    #[error("type `{name}` is not known to the type universe")]
    UnknownType {
        /// Qualified name of the missing type.
        name: String,
    },
    /// An annotation's own declaration could not be resolved.
    #[error("annotation `@{name}` has no resolvable declaration")]
    UnresolvedAnnotation {
        /// Qualified name of the missing annotation type.
        name: String,
    },
}

/// Decides whether an annotation occurrence is a qualifier.
pub trait QualifierClassifier {
    /// Returns `true` when the annotation's declaration carries a qualifier
    /// marker.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnresolvedAnnotation`] when the annotation type
    /// is unknown.
    fn is_qualifier(&self, annotation: &AnnotationUse) -> Result<bool, LookupError>;
}

/// Decides assignment compatibility between two types.
pub trait AssignabilityOracle {
    /// Returns `true` when a value of type `from` may be used where `to` is
    /// expected.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownType`] when either type names an unknown
    /// declaration.
    fn is_assignable(&self, from: &TypeRef, to: &TypeRef) -> Result<bool, LookupError>;

    /// Like [`is_assignable`](Self::is_assignable), reading variables that
    /// `scope` declares through their bounds.
    ///
    /// The provided method only resolves a top-level `from` variable;
    /// implementations that look inside type arguments should override it.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownType`] when either type, or a bound
    /// consulted on the way, names an unknown declaration.
    fn is_assignable_in(
        &self,
        from: &TypeRef,
        to: &TypeRef,
        scope: &TypeScope<'_>,
    ) -> Result<bool, LookupError> {
        scope.assignable_with(from, to, |from, to| self.is_assignable(from, to))
    }
}

/// Decides whether a thrown type is unchecked.
pub trait ExceptionClassifier {
    /// Returns `true` when `thrown` is, or descends from, an unchecked root.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownType`] when `thrown` names an unknown
    /// declaration.
    fn is_unchecked(&self, thrown: &TypeRef) -> Result<bool, LookupError>;

    /// Like [`is_unchecked`](Self::is_unchecked), treating a variable that
    /// `scope` declares as unchecked when any of its declared bounds is.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownType`] when `thrown` or one of its
    /// bounds names an unknown declaration.
    fn is_unchecked_in(&self, thrown: &TypeRef, scope: &TypeScope<'_>) -> Result<bool, LookupError> {
        let TypeRef::Variable(name) = thrown else {
            return self.is_unchecked(thrown);
        };
        let Some(bounds) = scope.upper_bounds(name) else {
            return self.is_unchecked(thrown);
        };
        for bound in bounds.declared() {
            if self.is_unchecked(bound)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
