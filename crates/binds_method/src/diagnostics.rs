//! Turn rule violations into localised diagnostics.
//!
//! Messages come from the shared Fluent bundles. When a lookup fails the
//! built-in English text is used instead, so a broken translation never
//! hides a violation.

use std::borrow::Cow;

use bindcheck_common::declaration::Declaration;
use bindcheck_common::diagnostics::{Diagnostic, error_at};
use bindcheck_common::i18n::{
    Arguments, DiagnosticMessageSet, FluentValue, Localizer, MessageResolution, noop_reporter,
    safe_resolve_message_set,
};

use crate::LINT_NAME;
use crate::config::Config;
use crate::validator::Violation;

pub(crate) fn render(
    violation: &Violation,
    declaration: &Declaration,
    localizer: &Localizer,
    config: &Config,
) -> Diagnostic {
    let rule = violation.rule();
    let facts = Facts::collect(violation, declaration, config);
    let args = facts.arguments();
    let resolution = MessageResolution {
        target: LINT_NAME,
        key: rule.message_key(),
        args: &args,
    };
    let messages = safe_resolve_message_set(localizer, resolution, noop_reporter, || {
        fallback_messages(violation, &facts)
    });

    error_at(
        rule.code(),
        strip_isolation_marks(messages.primary()),
        violation.location(),
    )
    .note(strip_isolation_marks(messages.note()))
    .help(strip_isolation_marks(messages.help()))
    .build()
}

/// Text fragments interpolated into a rule's messages.
#[derive(Debug, Default)]
struct Facts {
    method: String,
    enclosing: String,
    count: usize,
    listed: String,
    parameter: String,
    returns: String,
}

impl Facts {
    fn collect(violation: &Violation, declaration: &Declaration, config: &Config) -> Self {
        let mut facts = Self {
            method: declaration.display_name(),
            enclosing: declaration.enclosing().name().to_string(),
            ..Self::default()
        };

        match violation {
            Violation::NotInModule | Violation::NotAbstract => {}
            Violation::ParameterCount { count } => facts.count = *count,
            Violation::NotAssignable { parameter, returns } => {
                facts.parameter = parameter.to_string();
                facts.returns = returns.to_string();
            }
            Violation::TypeParameters { names } => {
                facts.count = names.len();
                facts.listed = names.join(", ");
            }
            Violation::CheckedThrows { checked } => {
                let limit = if config.report_all_checked_throws {
                    checked.len()
                } else {
                    1
                };
                let reported: Vec<String> =
                    checked.iter().take(limit).map(ToString::to_string).collect();
                facts.count = reported.len();
                facts.listed = reported.join(", ");
            }
            Violation::MultipleQualifiers { qualifiers } => {
                facts.count = qualifiers.len();
                facts.listed = qualifiers
                    .iter()
                    .map(|(_, annotation)| annotation.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
            }
        }
        facts
    }

    fn arguments(&self) -> Arguments<'static> {
        let mut args: Arguments<'static> = Arguments::default();
        let mut text = |key: &'static str, value: &str| {
            args.insert(
                Cow::Borrowed(key),
                FluentValue::String(Cow::Owned(value.to_owned())),
            );
        };
        text("method", &self.method);
        text("enclosing", &self.enclosing);
        text("parameter", &self.parameter);
        text("return", &self.returns);
        text("names", &self.listed);
        text("thrown", &self.listed);
        text("qualifiers", &self.listed);
        args.insert(Cow::Borrowed("count"), FluentValue::from(self.count));
        args
    }
}

fn fallback_messages(violation: &Violation, facts: &Facts) -> DiagnosticMessageSet {
    let (primary, note, help) = match violation {
        Violation::NotInModule => (
            String::from("@Binds methods can only be present within a @Module or @ProducerModule"),
            format!(
                "`{}` is declared in `{}`, which carries neither annotation.",
                facts.method, facts.enclosing
            ),
            String::from("Move the method into a type annotated with @Module or @ProducerModule."),
        ),
        Violation::NotAbstract => (
            String::from("@Binds methods must be abstract"),
            format!(
                "`{}` declares a body, but @Binds methods are never invoked.",
                facts.method
            ),
            String::from("Remove the body and mark the method abstract."),
        ),
        Violation::ParameterCount { count } => (
            String::from("@Binds methods must have exactly one parameter"),
            match count {
                0 => String::from("The method declares no parameters."),
                1 => String::from("The method declares one parameter."),
                _ => format!("The method declares {count} parameters."),
            },
            String::from("Declare a single parameter whose type implements the bound type."),
        ),
        Violation::NotAssignable { .. } => (
            format!(
                "@Binds method parameter type {} must be assignable to the return type {}",
                facts.parameter, facts.returns
            ),
            String::from("A @Binds method aliases its parameter type to its return type."),
            format!("Use a parameter type that is a subtype of {}.", facts.returns),
        ),
        Violation::TypeParameters { .. } => (
            String::from("@Binds methods may not have type parameters"),
            format!("The method declares {}.", facts.listed),
            String::from("Bind a concrete type instead of a type variable."),
        ),
        Violation::CheckedThrows { .. } => (
            String::from("@Binds methods may only throw unchecked exceptions"),
            if facts.count == 1 {
                format!("{} is a checked exception.", facts.listed)
            } else {
                format!("{} are checked exceptions.", facts.listed)
            },
            String::from(
                "Remove the throws clause; generated code cannot handle checked exceptions.",
            ),
        ),
        Violation::MultipleQualifiers { .. } => (
            String::from("@Binds methods may not use more than one @Qualifier"),
            format!("Found {} qualifiers: {}.", facts.count, facts.listed),
            String::from("Keep the single qualifier that identifies the binding."),
        ),
    };

    DiagnosticMessageSet::new(primary, note, help)
}

/// Fluent wraps interpolated values in bidi isolation marks. Diagnostics are
/// rendered as plain text, so the marks are dropped.
fn strip_isolation_marks(text: &str) -> String {
    text.chars()
        .filter(|character| !matches!(character, '\u{2068}' | '\u{2069}'))
        .collect()
}
