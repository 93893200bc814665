//! Tests for type references and the in-memory hierarchy.

use super::*;
use crate::annotations::{AnnotationUse, QUALIFIER_MARKER};
use crate::declaration::TypeParameter;
use rstest::{fixture, rstest};

#[fixture]
fn hierarchy() -> TypeHierarchy {
    TypeHierarchy::bootstrap()
}

fn declared(name: &str) -> TypeRef {
    TypeRef::declared(name)
}

fn list_of(argument: TypeRef) -> TypeRef {
    TypeRef::generic("java.util.List", vec![argument])
}

#[rstest]
#[case::identity(declared("java.lang.String"), declared("java.lang.String"), true)]
#[case::interface(declared("java.lang.String"), declared("java.lang.CharSequence"), true)]
#[case::object(declared("java.lang.CharSequence"), declared(OBJECT), true)]
#[case::narrowing(declared(OBJECT), declared("java.lang.String"), false)]
#[case::siblings(declared("java.lang.Integer"), declared("java.lang.String"), false)]
#[case::transitive(declared("java.lang.IllegalStateException"), declared("java.lang.Throwable"), true)]
#[case::primitive_identity(TypeRef::primitive("int"), TypeRef::primitive("int"), true)]
#[case::primitive_mismatch(TypeRef::primitive("int"), TypeRef::primitive("long"), false)]
#[case::no_boxing(TypeRef::primitive("int"), declared("java.lang.Integer"), false)]
#[case::void_target(declared(OBJECT), TypeRef::Void, false)]
#[case::variable_identity(TypeRef::variable("T"), TypeRef::variable("T"), true)]
#[case::variable_to_object(TypeRef::variable("T"), declared(OBJECT), true)]
#[case::variable_mismatch(TypeRef::variable("T"), TypeRef::variable("S"), false)]
fn decides_simple_assignability(
    hierarchy: TypeHierarchy,
    #[case] from: TypeRef,
    #[case] to: TypeRef,
    #[case] expected: bool,
) {
    assert_eq!(hierarchy.is_assignable(&from, &to), Ok(expected));
}

#[rstest]
#[case::substituted(
    TypeRef::generic("java.util.ArrayList", vec![declared("java.lang.String")]),
    list_of(declared("java.lang.String")),
    true
)]
#[case::invariant(
    TypeRef::generic("java.util.ArrayList", vec![declared("java.lang.String")]),
    list_of(declared("java.lang.CharSequence")),
    false
)]
#[case::bounded_wildcard(
    list_of(declared("java.lang.String")),
    list_of(TypeRef::wildcard_extends(declared("java.lang.CharSequence"))),
    true
)]
#[case::unbounded_wildcard(
    list_of(declared("java.lang.Integer")),
    list_of(TypeRef::wildcard()),
    true
)]
#[case::wildcard_bound_too_narrow(
    list_of(declared(OBJECT)),
    list_of(TypeRef::wildcard_extends(declared("java.lang.String"))),
    false
)]
#[case::raw_target(
    TypeRef::generic("java.util.ArrayList", vec![declared("java.lang.String")]),
    declared("java.util.Collection"),
    true
)]
#[case::raw_source(
    declared("java.util.ArrayList"),
    list_of(declared("java.lang.String")),
    true
)]
#[case::variable_argument(
    list_of(TypeRef::variable("T")),
    TypeRef::generic("java.util.Collection", vec![TypeRef::variable("T")]),
    true
)]
fn decides_generic_assignability(
    hierarchy: TypeHierarchy,
    #[case] from: TypeRef,
    #[case] to: TypeRef,
    #[case] expected: bool,
) {
    assert_eq!(hierarchy.is_assignable(&from, &to), Ok(expected));
}

#[rstest]
fn unknown_types_fail_lookup(hierarchy: TypeHierarchy) {
    let outcome = hierarchy.is_assignable(&declared("com.example.Missing"), &declared(OBJECT));

    assert_eq!(
        outcome,
        Err(LookupError::UnknownType {
            name: String::from("com.example.Missing"),
        })
    );
}

#[rstest]
#[case::runtime("java.lang.RuntimeException", true)]
#[case::runtime_descendant("java.lang.IllegalStateException", true)]
#[case::error("java.lang.Error", true)]
#[case::checked("java.io.IOException", false)]
#[case::exception("java.lang.Exception", false)]
#[case::throwable("java.lang.Throwable", false)]
fn classifies_exceptions(hierarchy: TypeHierarchy, #[case] name: &str, #[case] expected: bool) {
    assert_eq!(hierarchy.is_unchecked(&declared(name)), Ok(expected));
}

#[rstest]
fn type_variables_are_not_unchecked(hierarchy: TypeHierarchy) {
    assert_eq!(hierarchy.is_unchecked(&TypeRef::variable("E")), Ok(false));
}

#[rstest]
fn configured_unchecked_roots_replace_defaults() {
    let mut hierarchy = TypeHierarchy::bootstrap();
    hierarchy.set_unchecked_roots(["java.io.IOException"]);

    assert_eq!(hierarchy.is_unchecked(&declared("java.io.IOException")), Ok(true));
    assert_eq!(
        hierarchy.is_unchecked(&declared("java.lang.RuntimeException")),
        Ok(false)
    );
}

#[rstest]
#[case::named("javax.inject.Named", true)]
#[case::scope("javax.inject.Singleton", false)]
#[case::binds("dagger.Binds", false)]
fn classifies_qualifiers(hierarchy: TypeHierarchy, #[case] name: &str, #[case] expected: bool) {
    assert_eq!(hierarchy.is_qualifier(&AnnotationUse::new(name)), Ok(expected));
}

#[rstest]
fn custom_qualifier_markers_are_honoured() {
    let mut hierarchy = TypeHierarchy::bootstrap();
    hierarchy.insert_annotation("jakarta.inject.Qualifier", []);
    hierarchy.insert_annotation("com.example.Blue", ["jakarta.inject.Qualifier"]);
    hierarchy.set_qualifier_markers([QUALIFIER_MARKER, "jakarta.inject.Qualifier"]);

    assert_eq!(
        hierarchy.is_qualifier(&AnnotationUse::new("com.example.Blue")),
        Ok(true)
    );
    assert_eq!(
        hierarchy.is_qualifier(&AnnotationUse::new("javax.inject.Named")),
        Ok(true)
    );
}

#[rstest]
fn unresolved_annotations_fail_lookup(hierarchy: TypeHierarchy) {
    let outcome = hierarchy.is_qualifier(&AnnotationUse::new("com.example.Unknown"));

    assert_eq!(
        outcome,
        Err(LookupError::UnresolvedAnnotation {
            name: String::from("com.example.Unknown"),
        })
    );
}

#[rstest]
fn cyclic_supertypes_terminate() {
    let mut hierarchy = TypeHierarchy::new();
    hierarchy.insert_class(ClassDeclaration::new("a.A").extends(declared("a.B")));
    hierarchy.insert_class(ClassDeclaration::new("a.B").extends(declared("a.A")));
    hierarchy.insert_class(ClassDeclaration::new("a.C"));

    assert_eq!(hierarchy.is_assignable(&declared("a.A"), &declared("a.C")), Ok(false));
}

#[rstest]
fn substitutes_and_renders_types() {
    let mut bindings = std::collections::HashMap::new();
    bindings.insert(String::from("E"), declared("java.lang.String"));
    let list = list_of(TypeRef::wildcard_extends(TypeRef::variable("E")));

    assert_eq!(
        list.substitute(&bindings).to_string(),
        "java.util.List<? extends java.lang.String>"
    );
}

fn method_variables() -> Vec<TypeParameter> {
    vec![
        TypeParameter::new("S", vec![declared("java.lang.CharSequence")]),
        TypeParameter::new("T", vec![TypeRef::variable("S")]),
        TypeParameter::new("E", vec![declared("java.lang.IllegalStateException")]),
    ]
}

#[rstest]
#[case::through_variable_chain(TypeRef::variable("T"), TypeRef::variable("S"), true)]
#[case::to_the_final_bound(TypeRef::variable("T"), declared("java.lang.CharSequence"), true)]
#[case::past_the_bound(TypeRef::variable("S"), declared("java.lang.String"), false)]
#[case::inside_wildcard(
    list_of(TypeRef::variable("T")),
    list_of(TypeRef::wildcard_extends(declared("java.lang.CharSequence"))),
    true
)]
#[case::invariant_arguments(
    list_of(TypeRef::variable("T")),
    list_of(TypeRef::variable("S")),
    false
)]
fn scoped_variables_follow_their_bounds(
    hierarchy: TypeHierarchy,
    #[case] from: TypeRef,
    #[case] to: TypeRef,
    #[case] expected: bool,
) {
    let variables = method_variables();
    let scope = TypeScope::new(&variables);

    assert_eq!(hierarchy.is_assignable_in(&from, &to, &scope), Ok(expected));
}

#[rstest]
fn unscoped_variables_stay_opaque(hierarchy: TypeHierarchy) {
    let from = TypeRef::variable("T");
    let to = TypeRef::variable("S");

    assert_eq!(hierarchy.is_assignable(&from, &to), Ok(false));
}

#[rstest]
fn scoped_thrown_variables_use_their_bounds(hierarchy: TypeHierarchy) {
    let variables = method_variables();
    let scope = TypeScope::new(&variables);

    assert_eq!(
        hierarchy.is_unchecked_in(&TypeRef::variable("E"), &scope),
        Ok(true)
    );
    assert_eq!(
        hierarchy.is_unchecked_in(&TypeRef::variable("S"), &scope),
        Ok(false)
    );
}

#[rstest]
fn bounds_naming_unknown_types_fail_lookup(hierarchy: TypeHierarchy) {
    let variables = [TypeParameter::new("T", vec![declared("com.example.Missing")])];
    let scope = TypeScope::new(&variables);

    let outcome =
        hierarchy.is_assignable_in(&TypeRef::variable("T"), &declared("java.lang.String"), &scope);

    assert_eq!(
        outcome,
        Err(LookupError::UnknownType {
            name: String::from("com.example.Missing"),
        })
    );
}
