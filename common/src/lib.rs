//! Shared validation infrastructure: the declaration model, type and
//! annotation capabilities, diagnostics, and localisation for bindcheck
//! validators.

pub mod annotations;
pub mod declaration;
pub mod diagnostics;
pub mod i18n;
pub mod path;
pub mod span;
pub mod types;

pub use annotations::{AnnotationUse, BINDS, ModuleKind, QUALIFIER_MARKER, has_annotation};
pub use declaration::{
    Declaration, DeclarationBuilder, DeclarationError, EnclosingType, Parameter, TypeParameter,
};
pub use diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticSink, Severity, error_at};
pub use i18n::{
    Arguments, FALLBACK_LOCALE, I18nError, LocaleSelection, LocaleSource, Localizer,
    MessageResolution, available_locales, get_localizer, match_locale, noop_reporter,
    normalise_locale, resolve_localizer, safe_resolve_message_set, supports_locale,
};
pub use path::QualifiedName;
pub use span::{LocationHint, SourceLocation, SourceSpan, SpanError};
pub use types::{
    AssignabilityOracle, ClassDeclaration, ExceptionClassifier, LookupError, QualifierClassifier,
    TypeHierarchy, TypeRef, TypeScope,
};
