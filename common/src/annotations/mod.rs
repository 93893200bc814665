//! Helpers for reasoning about annotation occurrences on declarations.

/// Annotation that marks a method as a binding alias.
pub const BINDS: &str = "dagger.Binds";

/// Meta-annotation that makes an annotation a qualifier.
pub const QUALIFIER_MARKER: &str = "javax.inject.Qualifier";

mod annotation;
mod helpers;
mod marker;

pub use annotation::AnnotationUse;
pub use helpers::{has_annotation, module_kind_of};
pub use marker::ModuleKind;
