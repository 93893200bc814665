//! Helpers for working with annotation collections.

use super::{AnnotationUse, ModuleKind};

/// Returns `true` when any annotation in `annotations` names `dotted`.
///
/// # Examples
///
/// ```
/// use bindcheck_common::annotations::{has_annotation, AnnotationUse, BINDS};
///
/// let annotations = vec![AnnotationUse::new(BINDS)];
/// assert!(has_annotation(&annotations, BINDS));
/// assert!(!has_annotation(&annotations, "dagger.Provides"));
/// ```
#[must_use]
pub fn has_annotation(annotations: &[AnnotationUse], dotted: &str) -> bool {
    annotations.iter().any(|annotation| annotation.is(dotted))
}

/// Returns the first recognised module marker in `annotations`.
///
/// # Examples
///
/// ```
/// use bindcheck_common::annotations::{module_kind_of, AnnotationUse, ModuleKind};
///
/// let annotations = vec![
///     AnnotationUse::new("javax.inject.Singleton"),
///     AnnotationUse::new("dagger.producers.ProducerModule"),
/// ];
/// assert_eq!(module_kind_of(&annotations), Some(ModuleKind::ProducerModule));
/// ```
#[must_use]
pub fn module_kind_of(annotations: &[AnnotationUse]) -> Option<ModuleKind> {
    annotations.iter().find_map(ModuleKind::from_annotation)
}
