//! Evaluate the `@Binds` rule table against one declaration.
//!
//! Every rule runs independently so a malformed method surfaces all of its
//! problems at once. The one exception is assignability, which only has a
//! meaning when the method declares exactly one parameter. Capability lookups
//! complete before any diagnostic is emitted, so a lookup failure leaves the
//! sink untouched.

use bindcheck_common::annotations::AnnotationUse;
use bindcheck_common::declaration::Declaration;
use bindcheck_common::diagnostics::{Diagnostic, DiagnosticSink};
use bindcheck_common::i18n::Localizer;
use bindcheck_common::span::LocationHint;
use bindcheck_common::types::{
    AssignabilityOracle, ExceptionClassifier, LookupError, QualifierClassifier, TypeRef, TypeScope,
};
use log::{debug, trace};

use crate::LINT_NAME;
use crate::config::Config;
use crate::diagnostics::render;
use crate::error::ValidationError;
use crate::rules::BindsRule;

/// The type-system capabilities the validator consults.
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    qualifiers: &'a (dyn QualifierClassifier + Sync),
    assignability: &'a (dyn AssignabilityOracle + Sync),
    exceptions: &'a (dyn ExceptionClassifier + Sync),
}

impl<'a> Capabilities<'a> {
    /// Groups three independently supplied capabilities.
    #[must_use]
    pub fn new(
        qualifiers: &'a (dyn QualifierClassifier + Sync),
        assignability: &'a (dyn AssignabilityOracle + Sync),
        exceptions: &'a (dyn ExceptionClassifier + Sync),
    ) -> Self {
        Self {
            qualifiers,
            assignability,
            exceptions,
        }
    }

    /// Uses one type universe for every capability.
    ///
    /// ```
    /// use bindcheck_common::types::TypeHierarchy;
    /// use binds_method::Capabilities;
    ///
    /// let hierarchy = TypeHierarchy::bootstrap();
    /// let _capabilities = Capabilities::from_universe(&hierarchy);
    /// ```
    #[must_use]
    pub fn from_universe<U>(universe: &'a U) -> Self
    where
        U: QualifierClassifier + AssignabilityOracle + ExceptionClassifier + Sync,
    {
        Self::new(universe, universe, universe)
    }
}

/// A rule violation with the facts its diagnostic reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Violation {
    NotInModule,
    NotAbstract,
    ParameterCount { count: usize },
    NotAssignable { parameter: TypeRef, returns: TypeRef },
    TypeParameters { names: Vec<String> },
    CheckedThrows { checked: Vec<TypeRef> },
    MultipleQualifiers { qualifiers: Vec<(usize, AnnotationUse)> },
}

impl Violation {
    pub(crate) const fn rule(&self) -> BindsRule {
        match self {
            Self::NotInModule => BindsRule::ModuleContext,
            Self::NotAbstract => BindsRule::Abstract,
            Self::ParameterCount { .. } => BindsRule::Arity,
            Self::NotAssignable { .. } => BindsRule::Assignability,
            Self::TypeParameters { .. } => BindsRule::TypeParameters,
            Self::CheckedThrows { .. } => BindsRule::CheckedThrows,
            Self::MultipleQualifiers { .. } => BindsRule::MultipleQualifiers,
        }
    }

    pub(crate) fn location(&self) -> LocationHint {
        match self {
            Self::NotAssignable { .. } => LocationHint::Parameter { index: 0 },
            Self::MultipleQualifiers { qualifiers } => qualifiers
                .get(1)
                .map_or(LocationHint::Method, |(index, _)| LocationHint::Annotation {
                    index: *index,
                }),
            _ => LocationHint::Method,
        }
    }
}

/// Validates `@Binds` methods against the binding alias rules.
///
/// The validator holds only shared references and immutable settings, so one
/// instance may validate independent declarations from many threads at once.
pub struct BindsMethodValidator<'a> {
    capabilities: Capabilities<'a>,
    localizer: Localizer,
    config: Config,
}

impl<'a> BindsMethodValidator<'a> {
    /// Creates a validator with default configuration.
    #[must_use]
    pub fn new(capabilities: Capabilities<'a>, localizer: Localizer) -> Self {
        Self {
            capabilities,
            localizer,
            config: Config::default(),
        }
    }

    /// Replaces the validator configuration.
    #[must_use]
    pub const fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Validates `declaration`, returning one diagnostic per violated rule in
    /// rule order. An empty list means the method is a valid binding alias.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Lookup`] when a capability cannot answer a
    /// query about the declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::annotations::AnnotationUse;
    /// use bindcheck_common::declaration::{Declaration, EnclosingType, Parameter};
    /// use bindcheck_common::i18n::Localizer;
    /// use bindcheck_common::types::{TypeHierarchy, TypeRef};
    /// use binds_method::{BindsMethodValidator, Capabilities};
    ///
    /// let hierarchy = TypeHierarchy::bootstrap();
    /// let validator = BindsMethodValidator::new(
    ///     Capabilities::from_universe(&hierarchy),
    ///     Localizer::new(Some("en-GB")),
    /// );
    /// let declaration = Declaration::builder("bindCharSequence")
    ///     .enclosing(EnclosingType::new("test.TestModule", vec![AnnotationUse::new("dagger.Module")]))
    ///     .is_abstract(true)
    ///     .parameter(Parameter::new("string", TypeRef::declared("java.lang.String")))
    ///     .returns(TypeRef::declared("java.lang.CharSequence"))
    ///     .annotation(AnnotationUse::new("dagger.Binds"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(validator.validate(&declaration).unwrap().is_empty());
    /// ```
    pub fn validate(&self, declaration: &Declaration) -> Result<Vec<Diagnostic>, ValidationError> {
        let mut diagnostics = Vec::new();
        self.validate_into(declaration, &mut diagnostics)?;
        Ok(diagnostics)
    }

    /// Validates `declaration` and hands each diagnostic to `sink`.
    ///
    /// Nothing is emitted when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Lookup`] when a capability cannot answer a
    /// query about the declaration.
    pub fn validate_into(
        &self,
        declaration: &Declaration,
        sink: &mut impl DiagnosticSink,
    ) -> Result<(), ValidationError> {
        let violations =
            self.violations(declaration)
                .map_err(|source| ValidationError::Lookup {
                    declaration: declaration.display_name(),
                    source,
                })?;

        for violation in &violations {
            debug!(
                target: LINT_NAME,
                "`{}` violates `{}`",
                declaration.display_name(),
                violation.rule(),
            );
            sink.emit(render(
                violation,
                declaration,
                &self.localizer,
                &self.config,
            ));
        }
        Ok(())
    }

    pub(crate) fn violations(
        &self,
        declaration: &Declaration,
    ) -> Result<Vec<Violation>, LookupError> {
        let mut violations = Vec::new();
        for rule in BindsRule::ALL {
            let outcome = self.check(rule, declaration)?;
            trace!(
                target: LINT_NAME,
                "`{rule}` on `{}`: {}",
                declaration.display_name(),
                if outcome.is_some() { "violated" } else { "satisfied" },
            );
            violations.extend(outcome);
        }
        Ok(violations)
    }

    fn check(
        &self,
        rule: BindsRule,
        declaration: &Declaration,
    ) -> Result<Option<Violation>, LookupError> {
        match rule {
            BindsRule::ModuleContext => Ok((!declaration.enclosing_type_is_module())
                .then_some(Violation::NotInModule)),
            BindsRule::Abstract => Ok((!declaration.is_abstract()).then_some(Violation::NotAbstract)),
            BindsRule::Arity => {
                let count = declaration.parameters().len();
                Ok((count != 1).then_some(Violation::ParameterCount { count }))
            }
            BindsRule::Assignability => self.check_assignability(declaration),
            BindsRule::TypeParameters => Ok(check_type_parameters(declaration)),
            BindsRule::CheckedThrows => self.check_throws(declaration),
            BindsRule::MultipleQualifiers => self.check_qualifiers(declaration),
        }
    }

    fn check_assignability(
        &self,
        declaration: &Declaration,
    ) -> Result<Option<Violation>, LookupError> {
        // Arity already reports methods without a single parameter.
        let [parameter] = declaration.parameters() else {
            return Ok(None);
        };

        let assignable = self.capabilities.assignability.is_assignable_in(
            parameter.ty(),
            declaration.return_type(),
            &TypeScope::new(declaration.type_parameters()),
        )?;
        Ok((!assignable).then(|| Violation::NotAssignable {
            parameter: parameter.ty().clone(),
            returns: declaration.return_type().clone(),
        }))
    }

    fn check_throws(&self, declaration: &Declaration) -> Result<Option<Violation>, LookupError> {
        let scope = TypeScope::new(declaration.type_parameters());
        let mut checked = Vec::new();
        for thrown in declaration.thrown_types() {
            if !self.capabilities.exceptions.is_unchecked_in(thrown, &scope)? {
                checked.push(thrown.clone());
            }
        }
        Ok((!checked.is_empty()).then_some(Violation::CheckedThrows { checked }))
    }

    fn check_qualifiers(
        &self,
        declaration: &Declaration,
    ) -> Result<Option<Violation>, LookupError> {
        let mut qualifiers = Vec::new();
        for (index, annotation) in declaration.annotations().iter().enumerate() {
            if self.capabilities.qualifiers.is_qualifier(annotation)? {
                qualifiers.push((index, annotation.clone()));
            }
        }
        Ok((qualifiers.len() > 1).then_some(Violation::MultipleQualifiers { qualifiers }))
    }
}

fn check_type_parameters(declaration: &Declaration) -> Option<Violation> {
    let names: Vec<String> = declaration
        .type_parameters()
        .iter()
        .map(|parameter| parameter.name().to_owned())
        .collect();
    (!names.is_empty()).then_some(Violation::TypeParameters { names })
}

#[cfg(test)]
#[path = "tests/validator.rs"]
mod tests;
