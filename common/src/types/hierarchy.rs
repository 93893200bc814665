//! In-memory type universe implementing every capability trait.

use std::collections::{HashMap, HashSet};

use log::trace;

use super::{
    AssignabilityOracle, ExceptionClassifier, LookupError, OBJECT, QualifierClassifier, TypeRef,
    TypeScope, UNCHECKED_ROOTS,
};
use crate::annotations::{AnnotationUse, BINDS, ModuleKind, QUALIFIER_MARKER};
use crate::path::QualifiedName;

const LOG_TARGET: &str = "bindcheck::types";

/// A class or interface with its generic parameters and direct supertypes.
///
/// Supertypes are written in terms of the declaration's own type parameters,
/// so `ArrayList<E>` records `List<E>` as a supertype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDeclaration {
    name: QualifiedName,
    type_parameters: Vec<String>,
    supertypes: Vec<TypeRef>,
}

impl ClassDeclaration {
    /// Declares a class with no type parameters and no explicit supertypes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::types::{ClassDeclaration, TypeRef};
    ///
    /// let list = ClassDeclaration::new("java.util.ArrayList")
    ///     .with_type_parameters(["E"])
    ///     .extends(TypeRef::generic("java.util.List", vec![TypeRef::variable("E")]));
    /// assert_eq!(list.type_parameters(), &["E"]);
    /// ```
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: QualifiedName::parse(name),
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Declares the class's type parameters.
    #[must_use]
    pub fn with_type_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a direct supertype.
    #[must_use]
    pub fn extends(mut self, supertype: TypeRef) -> Self {
        self.supertypes.push(supertype);
        self
    }

    /// Returns the declaration's qualified name.
    #[must_use]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns the declared type parameter names.
    #[must_use]
    pub fn type_parameters(&self) -> &[String] {
        &self.type_parameters
    }

    /// Returns the direct supertypes.
    #[must_use]
    pub fn supertypes(&self) -> &[TypeRef] {
        &self.supertypes
    }
}

/// A self-contained type universe.
///
/// Classes without explicit supertypes implicitly extend `java.lang.Object`.
/// Annotation declarations record their own meta-annotations so qualifier
/// status can be derived from them.
#[derive(Clone, Debug)]
pub struct TypeHierarchy {
    classes: HashMap<QualifiedName, ClassDeclaration>,
    annotations: HashMap<QualifiedName, Vec<QualifiedName>>,
    qualifier_markers: Vec<QualifiedName>,
    unchecked_roots: Vec<QualifiedName>,
}

impl Default for TypeHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeHierarchy {
    /// Creates an empty universe containing only `java.lang.Object`.
    #[must_use]
    pub fn new() -> Self {
        let mut hierarchy = Self {
            classes: HashMap::new(),
            annotations: HashMap::new(),
            qualifier_markers: vec![QualifiedName::parse(QUALIFIER_MARKER)],
            unchecked_roots: UNCHECKED_ROOTS.into_iter().map(QualifiedName::parse).collect(),
        };
        hierarchy.insert_class(ClassDeclaration::new(OBJECT));
        hierarchy
    }

    /// Creates a universe preloaded with the core library and injection types.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::types::{AssignabilityOracle, TypeHierarchy, TypeRef};
    ///
    /// let hierarchy = TypeHierarchy::bootstrap();
    /// let string = TypeRef::declared("java.lang.String");
    /// let chars = TypeRef::declared("java.lang.CharSequence");
    /// assert_eq!(hierarchy.is_assignable(&string, &chars), Ok(true));
    /// assert_eq!(hierarchy.is_assignable(&chars, &string), Ok(false));
    /// ```
    #[must_use]
    pub fn bootstrap() -> Self {
        let mut hierarchy = Self::new();
        let object = || TypeRef::declared(OBJECT);
        let element = || vec![TypeRef::variable("E")];

        for class in [
            ClassDeclaration::new("java.lang.CharSequence"),
            ClassDeclaration::new("java.lang.String")
                .extends(object())
                .extends(TypeRef::declared("java.lang.CharSequence")),
            ClassDeclaration::new("java.lang.Number"),
            ClassDeclaration::new("java.lang.Integer").extends(TypeRef::declared("java.lang.Number")),
            ClassDeclaration::new("java.lang.Throwable"),
            ClassDeclaration::new("java.lang.Exception")
                .extends(TypeRef::declared("java.lang.Throwable")),
            ClassDeclaration::new("java.lang.RuntimeException")
                .extends(TypeRef::declared("java.lang.Exception")),
            ClassDeclaration::new("java.lang.Error")
                .extends(TypeRef::declared("java.lang.Throwable")),
            ClassDeclaration::new("java.lang.IllegalStateException")
                .extends(TypeRef::declared("java.lang.RuntimeException")),
            ClassDeclaration::new("java.io.IOException")
                .extends(TypeRef::declared("java.lang.Exception")),
            ClassDeclaration::new("java.util.Collection").with_type_parameters(["E"]),
            ClassDeclaration::new("java.util.List")
                .with_type_parameters(["E"])
                .extends(TypeRef::generic("java.util.Collection", element())),
            ClassDeclaration::new("java.util.ArrayList")
                .with_type_parameters(["E"])
                .extends(TypeRef::generic("java.util.List", element())),
        ] {
            hierarchy.insert_class(class);
        }

        hierarchy.insert_annotation(BINDS, []);
        for kind in ModuleKind::ALL {
            hierarchy.insert_annotation(kind.annotation_name(), []);
        }
        hierarchy.insert_annotation(QUALIFIER_MARKER, []);
        hierarchy.insert_annotation("javax.inject.Scope", []);
        hierarchy.insert_annotation("javax.inject.Named", [QUALIFIER_MARKER]);
        hierarchy.insert_annotation("javax.inject.Singleton", ["javax.inject.Scope"]);
        hierarchy.insert_annotation("java.lang.Deprecated", []);
        hierarchy
    }

    /// Adds or replaces a class declaration.
    pub fn insert_class(&mut self, class: ClassDeclaration) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Adds or replaces an annotation declaration and its meta-annotations.
    pub fn insert_annotation<'a, I>(&mut self, name: &str, meta: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.annotations.insert(
            QualifiedName::parse(name),
            meta.into_iter().map(QualifiedName::parse).collect(),
        );
    }

    /// Replaces the meta-annotations that mark an annotation as a qualifier.
    pub fn set_qualifier_markers<'a, I>(&mut self, markers: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.qualifier_markers = markers.into_iter().map(QualifiedName::parse).collect();
    }

    /// Replaces the throwable roots whose descendants are unchecked.
    pub fn set_unchecked_roots<'a, I>(&mut self, roots: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.unchecked_roots = roots.into_iter().map(QualifiedName::parse).collect();
    }

    /// Returns `true` when `name` is a known class or annotation.
    #[must_use]
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.classes.contains_key(name) || self.annotations.contains_key(name)
    }

    fn class(&self, name: &QualifiedName) -> Result<&ClassDeclaration, LookupError> {
        self.classes.get(name).ok_or_else(|| LookupError::UnknownType {
            name: name.to_string(),
        })
    }

    fn ensure_known(&self, ty: &TypeRef) -> Result<(), LookupError> {
        match ty {
            TypeRef::Declared { name, arguments } => {
                self.class(name)?;
                arguments
                    .iter()
                    .try_for_each(|argument| self.ensure_known(argument))
            }
            TypeRef::Wildcard { upper: Some(bound) } => self.ensure_known(bound),
            TypeRef::Wildcard { upper: None }
            | TypeRef::Variable(_)
            | TypeRef::Primitive(_)
            | TypeRef::Void => Ok(()),
        }
    }

    /// Finds how `target` is instantiated when viewed as a supertype of
    /// `name<arguments>`. Raw uses erase every supertype on the path.
    fn supertype_arguments(
        &self,
        name: &QualifiedName,
        arguments: &[TypeRef],
        target: &QualifiedName,
    ) -> Result<Option<Vec<TypeRef>>, LookupError> {
        let mut visited = HashSet::new();
        self.search_supertypes(name, arguments, target, &mut visited)
    }

    fn search_supertypes<'a>(
        &'a self,
        name: &'a QualifiedName,
        arguments: &[TypeRef],
        target: &QualifiedName,
        visited: &mut HashSet<&'a QualifiedName>,
    ) -> Result<Option<Vec<TypeRef>>, LookupError> {
        if name == target {
            return Ok(Some(arguments.to_vec()));
        }
        if !visited.insert(name) {
            return Ok(None);
        }

        let class = self.class(name)?;
        let raw = arguments.len() != class.type_parameters.len();
        let bindings: HashMap<String, TypeRef> = if raw {
            HashMap::new()
        } else {
            class
                .type_parameters
                .iter()
                .cloned()
                .zip(arguments.iter().cloned())
                .collect()
        };

        for supertype in &class.supertypes {
            let TypeRef::Declared {
                name: super_name,
                arguments: super_arguments,
            } = supertype
            else {
                continue;
            };
            let instantiated: Vec<TypeRef> = if raw {
                Vec::new()
            } else {
                super_arguments
                    .iter()
                    .map(|argument| argument.substitute(&bindings))
                    .collect()
            };
            if let Some(found) =
                self.search_supertypes(super_name, &instantiated, target, visited)?
            {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }

    fn declared_assignable(
        &self,
        from: (&QualifiedName, &[TypeRef]),
        to: (&QualifiedName, &[TypeRef]),
        scope: &TypeScope<'_>,
    ) -> Result<bool, LookupError> {
        let Some(viewed) = self.supertype_arguments(from.0, from.1, to.0)? else {
            return Ok(false);
        };

        // Raw targets accept any instantiation; raw sources convert unchecked.
        if to.1.is_empty() || viewed.is_empty() {
            return Ok(true);
        }
        if viewed.len() != to.1.len() {
            return Ok(false);
        }

        for (actual, expected) in viewed.iter().zip(to.1) {
            if !self.contains_argument(actual, expected, scope)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn contains_argument(
        &self,
        actual: &TypeRef,
        expected: &TypeRef,
        scope: &TypeScope<'_>,
    ) -> Result<bool, LookupError> {
        match (actual, expected) {
            (_, TypeRef::Wildcard { upper: None }) => Ok(true),
            (TypeRef::Wildcard { upper: Some(inner) }, TypeRef::Wildcard { upper: Some(bound) }) => {
                self.assignable(inner, bound, scope)
            }
            (TypeRef::Wildcard { upper: None }, TypeRef::Wildcard { upper: Some(bound) }) => {
                Ok(is_object(bound))
            }
            (_, TypeRef::Wildcard { upper: Some(bound) }) => self.assignable(actual, bound, scope),
            _ => Ok(actual == expected),
        }
    }

    fn assignable(
        &self,
        from: &TypeRef,
        to: &TypeRef,
        scope: &TypeScope<'_>,
    ) -> Result<bool, LookupError> {
        self.ensure_known(from)?;
        self.ensure_known(to)?;

        let assignable = match (from, to) {
            (TypeRef::Void, _) | (_, TypeRef::Void) => false,
            (TypeRef::Wildcard { .. }, _) | (_, TypeRef::Wildcard { .. }) => false,
            (TypeRef::Primitive(left), TypeRef::Primitive(right)) => left == right,
            (TypeRef::Primitive(_), _) | (_, TypeRef::Primitive(_)) => false,
            (_, target) if is_object(target) => true,
            (TypeRef::Variable(name), _) if scope.declares(name) => {
                scope.assignable_with(from, to, |bound, target| {
                    self.assignable(bound, target, scope)
                })?
            }
            (TypeRef::Variable(left), TypeRef::Variable(right)) => left == right,
            (TypeRef::Variable(_), TypeRef::Declared { .. })
            | (TypeRef::Declared { .. }, TypeRef::Variable(_)) => false,
            (
                TypeRef::Declared {
                    name: from_name,
                    arguments: from_arguments,
                },
                TypeRef::Declared {
                    name: to_name,
                    arguments: to_arguments,
                },
            ) => self.declared_assignable(
                (from_name, from_arguments.as_slice()),
                (to_name, to_arguments.as_slice()),
                scope,
            )?,
        };

        trace!(target: LOG_TARGET, "`{from}` assignable to `{to}`: {assignable}");
        Ok(assignable)
    }
}

fn is_object(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Declared { name, arguments } if arguments.is_empty() && name.is(OBJECT))
}

impl AssignabilityOracle for TypeHierarchy {
    fn is_assignable(&self, from: &TypeRef, to: &TypeRef) -> Result<bool, LookupError> {
        self.assignable(from, to, &TypeScope::default())
    }

    fn is_assignable_in(
        &self,
        from: &TypeRef,
        to: &TypeRef,
        scope: &TypeScope<'_>,
    ) -> Result<bool, LookupError> {
        self.assignable(from, to, scope)
    }
}

impl ExceptionClassifier for TypeHierarchy {
    fn is_unchecked(&self, thrown: &TypeRef) -> Result<bool, LookupError> {
        let TypeRef::Declared { name, .. } = thrown else {
            return Ok(false);
        };
        self.class(name)?;

        for root in &self.unchecked_roots {
            if self.supertype_arguments(name, &[], root)?.is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl QualifierClassifier for TypeHierarchy {
    fn is_qualifier(&self, annotation: &AnnotationUse) -> Result<bool, LookupError> {
        let meta = self.annotations.get(annotation.name()).ok_or_else(|| {
            LookupError::UnresolvedAnnotation {
                name: annotation.name().to_string(),
            }
        })?;

        Ok(meta
            .iter()
            .any(|marker| self.qualifier_markers.contains(marker)))
    }
}
