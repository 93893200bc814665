//! Module marker classification.

use std::fmt;

use super::AnnotationUse;

/// The closed set of annotations that turn a type into a module.
///
/// Both markers are interchangeable for binding validation. Adding a marker
/// means adding a variant here, so the recognised set stays reviewable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// `@dagger.Module`.
    Module,
    /// `@dagger.producers.ProducerModule`.
    ProducerModule,
}

impl ModuleKind {
    /// Every recognised marker, in declaration order.
    pub const ALL: [Self; 2] = [Self::Module, Self::ProducerModule];

    /// Returns the qualified name of the marker annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::annotations::ModuleKind;
    ///
    /// assert_eq!(ModuleKind::ProducerModule.annotation_name(), "dagger.producers.ProducerModule");
    /// ```
    #[must_use]
    pub const fn annotation_name(self) -> &'static str {
        match self {
            Self::Module => "dagger.Module",
            Self::ProducerModule => "dagger.producers.ProducerModule",
        }
    }

    /// Classifies an annotation occurrence as a module marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::annotations::{AnnotationUse, ModuleKind};
    ///
    /// let marker = AnnotationUse::new("dagger.Module");
    /// assert_eq!(ModuleKind::from_annotation(&marker), Some(ModuleKind::Module));
    /// assert_eq!(ModuleKind::from_annotation(&AnnotationUse::new("dagger.Binds")), None);
    /// ```
    #[must_use]
    pub fn from_annotation(annotation: &AnnotationUse) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| annotation.is(kind.annotation_name()))
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => f.write_str("@Module"),
            Self::ProducerModule => f.write_str("@ProducerModule"),
        }
    }
}
