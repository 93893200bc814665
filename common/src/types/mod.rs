//! Type references and the capabilities used to reason about them.
//!
//! The validators treat types as opaque values. Every question that needs the
//! wider type universe (assignability, exception category, qualifier status)
//! goes through one of the capability traits so hosts can plug in their own
//! resolver. [`TypeHierarchy`] is the in-memory resolver shipped with the
//! workspace.

mod capabilities;
mod hierarchy;
mod scope;
mod type_ref;

pub use capabilities::{AssignabilityOracle, ExceptionClassifier, LookupError, QualifierClassifier};
pub use hierarchy::{ClassDeclaration, TypeHierarchy};
pub use scope::{TypeScope, UpperBounds};
pub use type_ref::{PRIMITIVES, TypeRef};

/// Root of every reference type.
pub const OBJECT: &str = "java.lang.Object";

/// Roots of the unchecked throwable categories.
pub const UNCHECKED_ROOTS: [&str; 2] = ["java.lang.RuntimeException", "java.lang.Error"];

#[cfg(test)]
mod tests;
