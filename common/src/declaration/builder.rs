//! Construction path for [`Declaration`] snapshots.

use thiserror::Error;

use super::{Declaration, EnclosingType, Parameter, TypeParameter};
use crate::annotations::AnnotationUse;
use crate::span::SourceSpan;
use crate::types::TypeRef;

/// Raised when a builder is missing facts every declaration must have.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeclarationError {
    /// The method name was blank.
    #[error("declaration name must not be empty")]
    EmptyName,
    /// No enclosing type was supplied.
    #[error("declaration `{method}` has no enclosing type")]
    MissingEnclosingType {
        /// Method name.
        method: String,
    },
    /// No return type was supplied.
    #[error("declaration `{method}` has no return type")]
    MissingReturnType {
        /// Method name.
        method: String,
    },
}

/// Collects the facts of a method declaration before freezing them.
///
/// Thrown types and annotations have set semantics: repeats are dropped and
/// the first occurrence keeps its position.
#[derive(Clone, Debug)]
pub struct DeclarationBuilder {
    name: String,
    enclosing: Option<EnclosingType>,
    is_abstract: bool,
    type_parameters: Vec<TypeParameter>,
    parameters: Vec<Parameter>,
    return_type: Option<TypeRef>,
    thrown_types: Vec<TypeRef>,
    annotations: Vec<AnnotationUse>,
    span: Option<SourceSpan>,
}

impl DeclarationBuilder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enclosing: None,
            is_abstract: false,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            thrown_types: Vec::new(),
            annotations: Vec::new(),
            span: None,
        }
    }

    /// Sets the enclosing type.
    #[must_use]
    pub fn enclosing(mut self, enclosing: EnclosingType) -> Self {
        self.enclosing = Some(enclosing);
        self
    }

    /// Marks whether the method lacks a body.
    #[must_use]
    pub fn is_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Appends a method-level type parameter.
    #[must_use]
    pub fn type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    /// Appends a formal parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Adds a thrown type unless it is already present.
    #[must_use]
    pub fn throws(mut self, thrown: TypeRef) -> Self {
        if !self.thrown_types.contains(&thrown) {
            self.thrown_types.push(thrown);
        }
        self
    }

    /// Adds an annotation occurrence unless the same annotation type is
    /// already present.
    #[must_use]
    pub fn annotation(mut self, annotation: AnnotationUse) -> Self {
        if !self
            .annotations
            .iter()
            .any(|existing| existing.name() == annotation.name())
        {
            self.annotations.push(annotation);
        }
        self
    }

    /// Records the method's source span.
    #[must_use]
    pub fn span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Freezes the collected facts.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] when the name is blank or the enclosing
    /// type or return type were never supplied.
    pub fn build(self) -> Result<Declaration, DeclarationError> {
        if self.name.trim().is_empty() {
            return Err(DeclarationError::EmptyName);
        }
        let Some(enclosing) = self.enclosing else {
            return Err(DeclarationError::MissingEnclosingType { method: self.name });
        };
        let Some(return_type) = self.return_type else {
            return Err(DeclarationError::MissingReturnType { method: self.name });
        };

        Ok(Declaration {
            enclosing,
            name: self.name,
            is_abstract: self.is_abstract,
            type_parameters: self.type_parameters,
            parameters: self.parameters,
            return_type,
            thrown_types: self.thrown_types,
            annotations: self.annotations,
            span: self.span,
        })
    }
}
