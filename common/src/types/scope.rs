//! Method type variables and their declared upper bounds.

use super::{LookupError, OBJECT, TypeRef};
use crate::declaration::TypeParameter;

/// The type variables a declaration introduces, used to answer questions
/// about `T` through what `T` is known to extend.
///
/// Variables the scope does not declare, such as those of an enclosing class,
/// are left to the capability to treat as opaque.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeScope<'a> {
    parameters: &'a [TypeParameter],
}

/// Everything a scoped variable is known to extend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpperBounds<'a> {
    variables: Vec<&'a str>,
    declared: Vec<&'a TypeRef>,
}

impl<'a> UpperBounds<'a> {
    /// The variable itself and every variable reached through its bounds.
    #[must_use]
    pub fn variables(&self) -> &[&'a str] {
        &self.variables
    }

    /// Bounds that are not type variables, in declaration order.
    #[must_use]
    pub fn declared(&self) -> &[&'a TypeRef] {
        &self.declared
    }
}

impl<'a> TypeScope<'a> {
    /// Scopes `parameters`, usually a declaration's type parameters.
    #[must_use]
    pub const fn new(parameters: &'a [TypeParameter]) -> Self {
        Self { parameters }
    }

    /// Returns `true` when `name` is one of the scope's variables.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }

    fn parameter(&self, name: &str) -> Option<&'a TypeParameter> {
        self.parameters
            .iter()
            .find(|parameter| parameter.name() == name)
    }

    /// Follows `name` through variable bounds such as `T extends S`.
    ///
    /// Returns `None` when the scope does not declare `name`. Cyclic bounds
    /// are visited once.
    ///
    /// ```
    /// use bindcheck_common::declaration::TypeParameter;
    /// use bindcheck_common::types::{TypeRef, TypeScope};
    ///
    /// let parameters = [
    ///     TypeParameter::new("S", vec![TypeRef::declared("java.lang.CharSequence")]),
    ///     TypeParameter::new("T", vec![TypeRef::variable("S")]),
    /// ];
    /// let bounds = TypeScope::new(&parameters).upper_bounds("T").unwrap();
    /// assert_eq!(bounds.variables(), &["T", "S"]);
    /// assert_eq!(bounds.declared(), &[&TypeRef::declared("java.lang.CharSequence")]);
    /// ```
    #[must_use]
    pub fn upper_bounds(&self, name: &str) -> Option<UpperBounds<'a>> {
        let mut bounds = UpperBounds::default();
        let mut pending = vec![self.parameter(name)?.name()];
        while let Some(current) = pending.pop() {
            if bounds.variables.contains(&current) {
                continue;
            }
            bounds.variables.push(current);
            let Some(parameter) = self.parameter(current) else {
                continue;
            };
            let mut variables = Vec::new();
            for bound in parameter.bounds() {
                match bound {
                    TypeRef::Variable(next) => variables.push(next.as_str()),
                    declared => bounds.declared.push(declared),
                }
            }
            pending.extend(variables.into_iter().rev());
        }
        Some(bounds)
    }

    /// Decides `from` to `to` when `from` is a scoped variable, delegating
    /// every other question to `base`.
    ///
    /// A scoped variable reaches another variable only through its own bound
    /// chain, and reaches anything else when one of its declared bounds does.
    /// A variable without declared bounds extends `java.lang.Object`.
    ///
    /// # Errors
    ///
    /// Propagates the first error `base` returns.
    pub fn assignable_with<F>(
        &self,
        from: &TypeRef,
        to: &TypeRef,
        mut base: F,
    ) -> Result<bool, LookupError>
    where
        F: FnMut(&TypeRef, &TypeRef) -> Result<bool, LookupError>,
    {
        let TypeRef::Variable(name) = from else {
            return base(from, to);
        };
        let Some(bounds) = self.upper_bounds(name) else {
            return base(from, to);
        };

        if matches!(to, TypeRef::Variable(target) if bounds.variables.contains(&target.as_str())) {
            return Ok(true);
        }
        if bounds.declared.is_empty() {
            return base(&TypeRef::declared(OBJECT), to);
        }
        for bound in bounds.declared {
            if base(bound, to)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parameters() -> Vec<TypeParameter> {
        vec![
            TypeParameter::new("S", Vec::new()),
            TypeParameter::new("T", vec![TypeRef::variable("S")]),
            TypeParameter::new(
                "U",
                vec![
                    TypeRef::declared("java.lang.CharSequence"),
                    TypeRef::declared("java.lang.Comparable"),
                ],
            ),
            TypeParameter::new("V", vec![TypeRef::variable("W")]),
            TypeParameter::new("W", vec![TypeRef::variable("V")]),
        ]
    }

    #[rstest]
    fn undeclared_variables_have_no_bounds() {
        let parameters = parameters();

        assert_eq!(TypeScope::new(&parameters).upper_bounds("E"), None);
        assert!(!TypeScope::default().declares("T"));
    }

    #[rstest]
    fn declared_bounds_keep_their_order() {
        let parameters = parameters();
        let bounds = TypeScope::new(&parameters)
            .upper_bounds("U")
            .expect("U is declared");

        assert_eq!(
            bounds.declared(),
            &[
                &TypeRef::declared("java.lang.CharSequence"),
                &TypeRef::declared("java.lang.Comparable"),
            ]
        );
    }

    #[rstest]
    fn cyclic_bounds_terminate() {
        let parameters = parameters();
        let bounds = TypeScope::new(&parameters)
            .upper_bounds("V")
            .expect("V is declared");

        assert_eq!(bounds.variables(), &["V", "W"]);
        assert!(bounds.declared().is_empty());
    }

    #[rstest]
    #[case::through_chain(TypeRef::variable("T"), TypeRef::variable("S"), true)]
    #[case::against_chain(TypeRef::variable("S"), TypeRef::variable("T"), false)]
    #[case::unbounded_erases_to_object(TypeRef::variable("S"), TypeRef::declared(OBJECT), true)]
    fn resolves_variables_before_delegating(
        #[case] from: TypeRef,
        #[case] to: TypeRef,
        #[case] expected: bool,
    ) {
        let parameters = parameters();
        let mut asked = Vec::new();

        let outcome = TypeScope::new(&parameters).assignable_with(&from, &to, |from, to| {
            asked.push((from.to_string(), to.to_string()));
            Ok(from == to)
        });

        assert_eq!(outcome, Ok(expected));
        assert!(asked.iter().all(|(from, _)| from != "T"));
    }
}
