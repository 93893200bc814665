//! The closed table of `@Binds` method rules.

use std::fmt;

use bindcheck_common::i18n::MessageKey;

/// One structural rule a `@Binds` method must satisfy.
///
/// Variants are listed in evaluation order; diagnostics for a declaration are
/// always reported in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindsRule {
    /// The enclosing type carries `@Module` or `@ProducerModule`.
    ModuleContext,
    /// The method has no body.
    Abstract,
    /// The method declares exactly one parameter.
    Arity,
    /// The parameter type is assignable to the return type.
    Assignability,
    /// The method declares no type parameters.
    TypeParameters,
    /// Every thrown type is unchecked.
    CheckedThrows,
    /// At most one qualifier annotation is present.
    MultipleQualifiers,
}

impl BindsRule {
    /// Every rule in evaluation order.
    pub const ALL: [Self; 7] = [
        Self::ModuleContext,
        Self::Abstract,
        Self::Arity,
        Self::Assignability,
        Self::TypeParameters,
        Self::CheckedThrows,
        Self::MultipleQualifiers,
    ];

    /// Stable diagnostic code for the rule.
    ///
    /// ```
    /// use binds_method::BindsRule;
    ///
    /// assert_eq!(BindsRule::Arity.code(), "binds_method::arity");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ModuleContext => "binds_method::module_context",
            Self::Abstract => "binds_method::abstract",
            Self::Arity => "binds_method::arity",
            Self::Assignability => "binds_method::assignability",
            Self::TypeParameters => "binds_method::type_parameters",
            Self::CheckedThrows => "binds_method::checked_throws",
            Self::MultipleQualifiers => "binds_method::multiple_qualifiers",
        }
    }

    /// Fluent message carrying the rule's primary text and its
    /// `.note`/`.help` attributes.
    #[must_use]
    pub const fn message_key(self) -> MessageKey<'static> {
        MessageKey::new(match self {
            Self::ModuleContext => "binds-method-not-in-module",
            Self::Abstract => "binds-method-not-abstract",
            Self::Arity => "binds-method-parameter-count",
            Self::Assignability => "binds-method-not-assignable",
            Self::TypeParameters => "binds-method-type-parameters",
            Self::CheckedThrows => "binds-method-checked-throws",
            Self::MultipleQualifiers => "binds-method-multiple-qualifiers",
        })
    }
}

impl fmt::Display for BindsRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
