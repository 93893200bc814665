//! Declaration fixtures shared by the validator tests.

use bindcheck_common::annotations::{AnnotationUse, BINDS, ModuleKind};
use bindcheck_common::declaration::{
    Declaration, DeclarationBuilder, EnclosingType, Parameter, TypeParameter,
};
use bindcheck_common::i18n::Localizer;
use bindcheck_common::types::{TypeHierarchy, TypeRef};

use crate::{BindsMethodValidator, BindsRule, Capabilities};

pub(crate) const ENCLOSING: &str = "test.TestModule";

/// Bootstrap universe plus two project qualifiers.
pub(crate) fn hierarchy() -> TypeHierarchy {
    let mut hierarchy = TypeHierarchy::bootstrap();
    hierarchy.insert_annotation("test.Blue", ["javax.inject.Qualifier"]);
    hierarchy.insert_annotation("test.Red", ["javax.inject.Qualifier"]);
    hierarchy
}

pub(crate) fn validator(hierarchy: &TypeHierarchy) -> BindsMethodValidator<'_> {
    BindsMethodValidator::new(
        Capabilities::from_universe(hierarchy),
        Localizer::new(Some("en-GB")),
    )
}

pub(crate) fn module(kind: ModuleKind) -> EnclosingType {
    EnclosingType::new(ENCLOSING, vec![AnnotationUse::new(kind.annotation_name())])
}

pub(crate) fn plain_type() -> EnclosingType {
    EnclosingType::new(ENCLOSING, Vec::new())
}

/// Starts an abstract `@Binds` method inside `enclosing`.
pub(crate) fn binds(enclosing: EnclosingType) -> DeclarationBuilder {
    Declaration::builder("bindObject")
        .enclosing(enclosing)
        .is_abstract(true)
        .annotation(AnnotationUse::new(BINDS))
}

/// Dotted names are declared types; bare names are type variables.
pub(crate) fn type_ref(name: &str) -> TypeRef {
    if name.contains('.') {
        TypeRef::declared(name)
    } else {
        TypeRef::variable(name)
    }
}

pub(crate) fn parameter(index: usize, name: &str) -> Parameter {
    Parameter::new(format!("arg{index}"), type_ref(name))
}

/// One declaration shape per documented validation outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    Valid,
    NotAbstract,
    NotAssignable,
    TwoParameters,
    TypeParameter,
    NotInModule,
    CheckedThrows,
    TwoQualifiers,
    NoParameters,
}

impl Shape {
    pub(crate) fn declaration(self, kind: ModuleKind) -> Declaration {
        let enclosing = if self == Self::NotInModule {
            plain_type()
        } else {
            module(kind)
        };
        let builder = binds(enclosing);
        let builder = match self {
            Self::Valid | Self::NotInModule => builder
                .parameter(parameter(0, "java.lang.String"))
                .returns(type_ref("java.lang.CharSequence")),
            Self::NotAbstract => builder
                .is_abstract(false)
                .parameter(parameter(0, "java.lang.String"))
                .returns(type_ref("java.lang.String")),
            Self::NotAssignable => builder
                .parameter(parameter(0, "java.lang.Object"))
                .returns(type_ref("java.lang.String")),
            Self::TwoParameters => builder
                .parameter(parameter(0, "java.lang.String"))
                .parameter(parameter(1, "java.lang.String"))
                .returns(type_ref("java.lang.Object")),
            // <S, T extends S> S bindObject(T arg0)
            Self::TypeParameter => builder
                .type_parameter(TypeParameter::new("S", Vec::new()))
                .type_parameter(TypeParameter::new("T", vec![type_ref("S")]))
                .parameter(parameter(0, "T"))
                .returns(type_ref("S")),
            Self::CheckedThrows => builder
                .parameter(parameter(0, "java.lang.String"))
                .returns(type_ref("java.lang.String"))
                .throws(type_ref("java.io.IOException")),
            Self::TwoQualifiers => builder
                .parameter(parameter(0, "java.lang.String"))
                .returns(type_ref("java.lang.String"))
                .annotation(AnnotationUse::new("javax.inject.Named"))
                .annotation(AnnotationUse::new("test.Blue")),
            Self::NoParameters => builder.returns(type_ref("java.lang.Object")),
        };
        builder.build().expect("fixture declarations are well formed")
    }

    pub(crate) const fn violated_rule(self) -> Option<BindsRule> {
        match self {
            Self::Valid => None,
            Self::NotAbstract => Some(BindsRule::Abstract),
            Self::NotAssignable => Some(BindsRule::Assignability),
            Self::TwoParameters | Self::NoParameters => Some(BindsRule::Arity),
            Self::TypeParameter => Some(BindsRule::TypeParameters),
            Self::NotInModule => Some(BindsRule::ModuleContext),
            Self::CheckedThrows => Some(BindsRule::CheckedThrows),
            Self::TwoQualifiers => Some(BindsRule::MultipleQualifiers),
        }
    }
}
