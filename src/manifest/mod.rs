//! Declaration manifests describing modules and the types they mention.
//!
//! A manifest is a TOML document standing in for a compiler front end. It
//! adds project types and annotations to the type universe and lists the
//! module types whose methods should be checked:
//!
//! ```toml
//! [[annotations]]
//! name = "com.example.Blue"
//! meta = ["javax.inject.Qualifier"]
//!
//! [[types]]
//! name = "com.example.Repository"
//! supertypes = ["java.lang.Object"]
//!
//! [[modules]]
//! name = "com.example.RepositoryModule"
//! annotations = ["dagger.Module"]
//!
//! [[modules.methods]]
//! name = "bindRepository"
//! abstract = true
//! annotations = ["dagger.Binds"]
//! parameters = [{ name = "impl", type = "com.example.Repository" }]
//! returns = "java.lang.Object"
//! at = { line = 14, column = 3 }
//! ```
//!
//! Only methods annotated with `dagger.Binds` become declarations. The
//! optional `at` tables on methods and parameters record where the element
//! was written, so reports can point at it. Method type parameters are bare
//! names or tables with bounds, such as `{ name = "T", bounds = ["S"] }`.

mod type_expr;

use bindcheck_common::annotations::{AnnotationUse, BINDS, has_annotation};
use bindcheck_common::declaration::{Declaration, EnclosingType, Parameter, TypeParameter};
use bindcheck_common::span::{SourceLocation, SourceSpan};
use bindcheck_common::types::{ClassDeclaration, TypeHierarchy};
use camino::Utf8Path;
use log::debug;
use serde::Deserialize;

use crate::error::{BindcheckError, Result};

pub use type_expr::parse_type;

/// A parsed declaration manifest.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Class and interface declarations added to the type universe.
    pub types: Vec<TypeEntry>,
    /// Annotation declarations added to the type universe.
    pub annotations: Vec<AnnotationEntry>,
    /// Enclosing types whose methods are candidates for checking.
    pub modules: Vec<ModuleEntry>,
}

/// A class or interface declaration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    /// Qualified type name.
    pub name: String,
    /// Names of the type's own type parameters.
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Direct supertypes as type expressions over `type_parameters`.
    #[serde(default)]
    pub supertypes: Vec<String>,
}

/// An annotation declaration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnnotationEntry {
    /// Qualified annotation name.
    pub name: String,
    /// Meta-annotations carried by the declaration.
    #[serde(default)]
    pub meta: Vec<String>,
}

/// An enclosing type and its methods.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModuleEntry {
    /// Qualified type name.
    pub name: String,
    /// Annotations on the type, such as `dagger.Module`.
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Methods declared by the type.
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

/// One method of an enclosing type.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MethodEntry {
    /// Simple method name.
    pub name: String,
    /// Whether the method lacks a body.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// The method's type parameters, as bare names or with bounds.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterEntry>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    /// Return type expression.
    pub returns: String,
    /// Thrown type expressions.
    #[serde(default)]
    pub throws: Vec<String>,
    /// Annotations on the method in source order.
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Where the method was declared.
    #[serde(default)]
    pub at: Option<Position>,
}

/// A method type parameter: `"T"`, or `{ name = "T", bounds = ["S"] }`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum TypeParameterEntry {
    /// A parameter extending `java.lang.Object`.
    Name(String),
    /// A parameter with explicit upper bounds.
    Bounded(BoundedTypeParameter),
}

/// A type parameter written as a table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BoundedTypeParameter {
    /// Parameter name.
    pub name: String,
    /// Upper bound type expressions; they may name any of the method's
    /// type parameters.
    #[serde(default)]
    pub bounds: Vec<String>,
}

impl TypeParameterEntry {
    /// The parameter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Bounded(BoundedTypeParameter { name, .. }) => name,
        }
    }

    /// The declared bound expressions; empty for bare names.
    #[must_use]
    pub fn bounds(&self) -> &[String] {
        match self {
            Self::Name(_) => &[],
            Self::Bounded(entry) => &entry.bounds,
        }
    }
}

/// A method parameter.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParameterEntry {
    /// Parameter name.
    pub name: String,
    /// Parameter type expression.
    #[serde(rename = "type")]
    pub ty: String,
    /// Where the parameter was declared.
    #[serde(default)]
    pub at: Option<Position>,
}

/// A one-based source position.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Position {
    /// Line number.
    pub line: usize,
    /// Column number; the start of the line when omitted.
    #[serde(default = "first_column")]
    pub column: usize,
}

const fn first_column() -> usize {
    1
}

impl Position {
    fn span(self) -> SourceSpan {
        SourceSpan::point(SourceLocation::new(self.line, self.column))
    }
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BindcheckError::Read`] when the file cannot be read and
    /// [`BindcheckError::InvalidToml`] when it does not match the schema.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| BindcheckError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&source, path)
    }

    /// Parses manifest text, attributing errors to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BindcheckError::InvalidToml`] when the text does not match
    /// the schema.
    pub fn parse(source: &str, path: &Utf8Path) -> Result<Self> {
        toml::from_str(source).map_err(|error| BindcheckError::InvalidToml {
            path: path.to_owned(),
            reason: error.to_string(),
        })
    }

    /// Adds the manifest's types and annotations to `hierarchy`.
    ///
    /// # Errors
    ///
    /// Returns [`BindcheckError::TypeExpression`] when a supertype does not
    /// parse.
    pub fn extend_hierarchy(&self, hierarchy: &mut TypeHierarchy) -> Result<()> {
        for entry in &self.types {
            let mut class = ClassDeclaration::new(&entry.name)
                .with_type_parameters(entry.type_parameters.iter().map(String::as_str));
            for supertype in &entry.supertypes {
                class = class.extends(parse_type(supertype, &entry.type_parameters)?);
            }
            hierarchy.insert_class(class);
        }
        for entry in &self.annotations {
            hierarchy.insert_annotation(&entry.name, entry.meta.iter().map(String::as_str));
        }
        Ok(())
    }

    /// Builds a declaration for every `@Binds` method, in manifest order.
    ///
    /// # Errors
    ///
    /// Returns [`BindcheckError::TypeExpression`] when a type does not parse
    /// and [`BindcheckError::Declaration`] when a method is incomplete.
    pub fn declarations(&self) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::new();
        for module in &self.modules {
            let enclosing =
                EnclosingType::new(module.name.as_str(), annotation_uses(&module.annotations));
            for method in &module.methods {
                let annotations = annotation_uses(&method.annotations);
                if !has_annotation(&annotations, BINDS) {
                    debug!(
                        target: "bindcheck::manifest",
                        "skipping {}#{}: not a @Binds method",
                        module.name,
                        method.name,
                    );
                    continue;
                }
                declarations.push(build_declaration(&enclosing, method, annotations)?);
            }
        }
        Ok(declarations)
    }
}

fn annotation_uses(names: &[String]) -> Vec<AnnotationUse> {
    names
        .iter()
        .map(|name| AnnotationUse::new(name.as_str()))
        .collect()
}

fn build_declaration(
    enclosing: &EnclosingType,
    method: &MethodEntry,
    annotations: Vec<AnnotationUse>,
) -> Result<Declaration> {
    let names: Vec<String> = method
        .type_parameters
        .iter()
        .map(|entry| entry.name().to_owned())
        .collect();
    let scope = names.as_slice();
    let mut builder = Declaration::builder(method.name.as_str())
        .enclosing(enclosing.clone())
        .is_abstract(method.is_abstract)
        .returns(parse_type(&method.returns, scope)?);

    if let Some(position) = method.at {
        builder = builder.span(position.span());
    }
    for entry in &method.type_parameters {
        let bounds = entry
            .bounds()
            .iter()
            .map(|bound| parse_type(bound, scope))
            .collect::<Result<Vec<_>>>()?;
        builder = builder.type_parameter(TypeParameter::new(entry.name(), bounds));
    }
    for entry in &method.parameters {
        let mut parameter = Parameter::new(entry.name.as_str(), parse_type(&entry.ty, scope)?);
        if let Some(position) = entry.at {
            parameter = parameter.with_span(position.span());
        }
        builder = builder.parameter(parameter);
    }
    for thrown in &method.throws {
        builder = builder.throws(parse_type(thrown, scope)?);
    }
    for annotation in annotations {
        builder = builder.annotation(annotation);
    }

    builder.build().map_err(|source| BindcheckError::Declaration {
        module: enclosing.name().to_string(),
        source,
    })
}
