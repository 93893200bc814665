//! Read-only snapshot of a binding method declaration.
//!
//! A [`Declaration`] holds the facts validators check: the enclosing type and
//! its module marker, abstractness, method-level type parameters, parameters,
//! return type, thrown types, and annotations. It is built once through
//! [`DeclarationBuilder`] and never mutated afterwards.

mod builder;

pub use builder::{DeclarationBuilder, DeclarationError};

use crate::annotations::{AnnotationUse, ModuleKind, module_kind_of};
use crate::path::QualifiedName;
use crate::span::{LocationHint, SourceSpan};
use crate::types::TypeRef;

/// A type parameter declared on the method itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParameter {
    name: String,
    bounds: Vec<TypeRef>,
}

impl TypeParameter {
    /// Creates a type parameter with the given upper bounds.
    #[must_use]
    pub fn new(name: impl Into<String>, bounds: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared upper bounds.
    #[must_use]
    pub fn bounds(&self) -> &[TypeRef] {
        &self.bounds
    }
}

/// A formal parameter of the method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    ty: TypeRef,
    span: Option<SourceSpan>,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            span: None,
        }
    }

    /// Attaches the parameter's source span.
    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter type.
    #[must_use]
    pub const fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Returns the source span, when recorded.
    #[must_use]
    pub const fn span(&self) -> Option<SourceSpan> {
        self.span
    }
}

/// The type directly enclosing the method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnclosingType {
    name: QualifiedName,
    annotations: Vec<AnnotationUse>,
}

impl EnclosingType {
    /// Creates an enclosing type with its annotations.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::annotations::{AnnotationUse, ModuleKind};
    /// use bindcheck_common::declaration::EnclosingType;
    ///
    /// let module = EnclosingType::new("test.TestModule", vec![AnnotationUse::new("dagger.Module")]);
    /// assert_eq!(module.module_kind(), Some(ModuleKind::Module));
    /// ```
    #[must_use]
    pub fn new(name: impl Into<QualifiedName>, annotations: Vec<AnnotationUse>) -> Self {
        Self {
            name: name.into(),
            annotations,
        }
    }

    /// Returns the qualified type name.
    #[must_use]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns the annotations written on the type.
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationUse] {
        &self.annotations
    }

    /// Returns the first recognised module marker on the type.
    #[must_use]
    pub fn module_kind(&self) -> Option<ModuleKind> {
        module_kind_of(&self.annotations)
    }
}

/// Immutable description of one candidate binding method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    enclosing: EnclosingType,
    name: String,
    is_abstract: bool,
    type_parameters: Vec<TypeParameter>,
    parameters: Vec<Parameter>,
    return_type: TypeRef,
    thrown_types: Vec<TypeRef>,
    annotations: Vec<AnnotationUse>,
    span: Option<SourceSpan>,
}

impl Declaration {
    /// Starts building a declaration for the method `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> DeclarationBuilder {
        DeclarationBuilder::new(name)
    }

    /// Returns the enclosing type.
    #[must_use]
    pub const fn enclosing(&self) -> &EnclosingType {
        &self.enclosing
    }

    /// Returns `true` when the enclosing type carries a module marker.
    #[must_use]
    pub fn enclosing_type_is_module(&self) -> bool {
        self.enclosing.module_kind().is_some()
    }

    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when the method has no body.
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Returns method-level type parameters in declaration order.
    #[must_use]
    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    /// Returns the formal parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the declared return type.
    #[must_use]
    pub const fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    /// Returns the distinct thrown types in first-seen order.
    #[must_use]
    pub fn thrown_types(&self) -> &[TypeRef] {
        &self.thrown_types
    }

    /// Returns the distinct annotation occurrences in source order.
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationUse] {
        &self.annotations
    }

    /// Returns the method's source span, when recorded.
    #[must_use]
    pub const fn span(&self) -> Option<SourceSpan> {
        self.span
    }

    /// Resolves a diagnostic's location hint to a recorded span.
    ///
    /// Parameters and annotations without a span of their own, and hints
    /// whose index is out of range, fall back to the method's span.
    #[must_use]
    pub fn span_for(&self, location: LocationHint) -> Option<SourceSpan> {
        let element = match location {
            LocationHint::Method => None,
            LocationHint::Parameter { index } => {
                self.parameters.get(index).and_then(Parameter::span)
            }
            LocationHint::Annotation { index } => {
                self.annotations.get(index).and_then(AnnotationUse::span)
            }
        };
        element.or(self.span)
    }

    /// Returns `Type#method`, used when reporting against the declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::annotations::AnnotationUse;
    /// use bindcheck_common::declaration::{Declaration, EnclosingType};
    /// use bindcheck_common::types::TypeRef;
    ///
    /// let declaration = Declaration::builder("bindObject")
    ///     .enclosing(EnclosingType::new("test.TestModule", vec![AnnotationUse::new("dagger.Module")]))
    ///     .returns(TypeRef::declared("java.lang.Object"))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(declaration.display_name(), "test.TestModule#bindObject");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}#{}", self.enclosing.name, self.name)
    }
}
