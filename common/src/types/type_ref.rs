//! Structural type references.

use std::collections::HashMap;
use std::fmt;

use crate::path::QualifiedName;

/// Primitive type keywords.
pub const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "short", "char", "int", "long", "float", "double",
];

/// A resolved type as it appears in a signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A class, interface, or annotation type, optionally parameterised.
    Declared {
        /// Qualified name of the declaration.
        name: QualifiedName,
        /// Type arguments; empty for raw or non-generic uses.
        arguments: Vec<Self>,
    },
    /// A type variable declared by the method or an enclosing type.
    Variable(String),
    /// A primitive such as `int`.
    Primitive(String),
    /// A wildcard type argument, `?` or `? extends T`.
    Wildcard {
        /// Upper bound, when written.
        upper: Option<Box<Self>>,
    },
    /// The `void` pseudo-type.
    Void,
}

impl TypeRef {
    /// A non-generic (or raw) declared type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::types::TypeRef;
    ///
    /// let string = TypeRef::declared("java.lang.String");
    /// assert_eq!(string.to_string(), "java.lang.String");
    /// ```
    #[must_use]
    pub fn declared(name: &str) -> Self {
        Self::generic(name, Vec::new())
    }

    /// A parameterised declared type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::types::TypeRef;
    ///
    /// let list = TypeRef::generic("java.util.List", vec![TypeRef::variable("T")]);
    /// assert_eq!(list.to_string(), "java.util.List<T>");
    /// ```
    #[must_use]
    pub fn generic(name: &str, arguments: Vec<Self>) -> Self {
        Self::Declared {
            name: QualifiedName::parse(name),
            arguments,
        }
    }

    /// A type variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// A primitive type.
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    /// The unbounded wildcard `?`.
    #[must_use]
    pub const fn wildcard() -> Self {
        Self::Wildcard { upper: None }
    }

    /// The bounded wildcard `? extends bound`.
    #[must_use]
    pub fn wildcard_extends(bound: Self) -> Self {
        Self::Wildcard {
            upper: Some(Box::new(bound)),
        }
    }

    /// Returns the declaration name of a declared type.
    #[must_use]
    pub const fn declared_name(&self) -> Option<&QualifiedName> {
        match self {
            Self::Declared { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the type arguments of a declared type, or an empty slice.
    #[must_use]
    pub fn arguments(&self) -> &[Self] {
        match self {
            Self::Declared { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// Returns `true` for types that can hold object references.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Declared { .. } | Self::Variable(_))
    }

    /// Returns `true` when `variable` occurs anywhere within the type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindcheck_common::types::TypeRef;
    ///
    /// let list = TypeRef::generic("java.util.List", vec![TypeRef::wildcard_extends(TypeRef::variable("T"))]);
    /// assert!(list.mentions_variable("T"));
    /// assert!(!list.mentions_variable("S"));
    /// ```
    #[must_use]
    pub fn mentions_variable(&self, variable: &str) -> bool {
        match self {
            Self::Variable(name) => name == variable,
            Self::Declared { arguments, .. } => arguments
                .iter()
                .any(|argument| argument.mentions_variable(variable)),
            Self::Wildcard { upper } => upper
                .as_deref()
                .is_some_and(|bound| bound.mentions_variable(variable)),
            Self::Primitive(_) | Self::Void => false,
        }
    }

    /// Replaces type variables using `bindings`; unbound variables are kept.
    #[must_use]
    pub fn substitute(&self, bindings: &HashMap<String, Self>) -> Self {
        match self {
            Self::Variable(name) => bindings.get(name).cloned().unwrap_or_else(|| self.clone()),
            Self::Declared { name, arguments } => Self::Declared {
                name: name.clone(),
                arguments: arguments
                    .iter()
                    .map(|argument| argument.substitute(bindings))
                    .collect(),
            },
            Self::Wildcard { upper } => Self::Wildcard {
                upper: upper
                    .as_deref()
                    .map(|bound| Box::new(bound.substitute(bindings))),
            },
            Self::Primitive(_) | Self::Void => self.clone(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared { name, arguments } => {
                write!(f, "{name}")?;
                if let Some((first, rest)) = arguments.split_first() {
                    write!(f, "<{first}")?;
                    for argument in rest {
                        write!(f, ", {argument}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Variable(name) | Self::Primitive(name) => f.write_str(name),
            Self::Wildcard { upper: None } => f.write_str("?"),
            Self::Wildcard { upper: Some(bound) } => write!(f, "? extends {bound}"),
            Self::Void => f.write_str("void"),
        }
    }
}
