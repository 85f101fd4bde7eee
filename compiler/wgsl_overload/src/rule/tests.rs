use pretty_assertions::assert_eq;
use wgsl_types::KindClass;

use super::*;

fn vector_plus_scalar() -> Declaration {
    Declaration::new("+", PatternDecl::vector("T", "N"))
        .kind("T", KindClass::Number)
        .dim("N")
        .param(PatternDecl::vector("T", "N"))
        .param("T")
}

#[test]
fn declare_numbers_variables_in_quantifier_order() {
    let rule = Rule::declare(&vector_plus_scalar()).unwrap_or_else(|e| panic!("{e}"));
    let t = VarId::from_raw(0);
    let n = VarId::from_raw(1);

    assert_eq!(rule.operator(), "+");
    assert_eq!(rule.arity(), 2);
    assert_eq!(
        rule.params(),
        &[
            TypePattern::Vector {
                element: ScalarPattern::Var(KindVar {
                    id: t,
                    class: KindClass::Number
                }),
                size: DimPattern::Var(n),
            },
            TypePattern::kind_var(t, KindClass::Number),
        ]
    );
    assert_eq!(rule.quantifiers()[1].name(), "N");
    assert_eq!(rule.quantifiers()[1].sort(), VarSort::Dim);
}

#[test]
fn display_round_trips_declaration_syntax() {
    let rule = Rule::declare(&vector_plus_scalar()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        rule.to_string(),
        "type('+', [Number(T), N], [Vector(T, N), T], Vector(T, N))"
    );
}

#[test]
fn scalar_literals_resolve_when_not_quantified() {
    let decl = Declaration::new("==", PatternDecl::vector("bool", "N"))
        .kind("T", KindClass::Scalar)
        .dim("N")
        .param(PatternDecl::vector("T", "N"))
        .param(PatternDecl::vector("T", "N"));
    let rule = Rule::declare(&decl).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        *rule.result(),
        TypePattern::Vector {
            element: ScalarPattern::Literal(ScalarKind::Bool),
            size: DimPattern::Var(VarId::from_raw(1)),
        }
    );
}

#[test]
fn fixed_dimensions() {
    let decl = Declaration::new("!", PatternDecl::vector("bool", 2u32))
        .param(PatternDecl::vector("bool", 2u32));
    let rule = Rule::declare(&decl).unwrap_or_else(|e| panic!("{e}"));
    assert!(rule.quantifiers().is_empty());
    assert_eq!(rule.to_string(), "type('!', [], [Vector(bool, 2)], Vector(bool, 2))");

    let decl = Declaration::new("!", "bool").param(PatternDecl::vector("bool", 5u32));
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::InvalidDimension {
            operator: "!".to_owned(),
            value: 5,
        })
    );
}

#[test]
fn empty_parameter_list_is_rejected() {
    let decl = Declaration::new("+", "f32");
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::EmptyParameterList {
            operator: "+".to_owned()
        })
    );
}

#[test]
fn unbound_result_variable_is_rejected() {
    // N only appears in the result.
    let decl = Declaration::new("+", PatternDecl::vector("T", "N"))
        .kind("T", KindClass::Number)
        .dim("N")
        .param("T")
        .param("T");
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::UnboundResultVariable {
            operator: "+".to_owned(),
            name: "N".to_owned(),
        })
    );
}

#[test]
fn result_variable_bound_only_by_first_param_is_fine() {
    let decl = Declaration::new("<<", "T")
        .kind("T", KindClass::Integer)
        .param("T")
        .param("u32");
    assert!(Rule::declare(&decl).is_ok());
}

#[test]
fn undeclared_names_are_rejected() {
    let decl = Declaration::new("+", "T").param("T");
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::UndeclaredVariable {
            operator: "+".to_owned(),
            name: "T".to_owned(),
        })
    );

    let decl = Declaration::new("+", "f32")
        .param(PatternDecl::vector("f32", "N"));
    assert!(matches!(
        Rule::declare(&decl),
        Err(DeclarationError::UndeclaredVariable { name, .. }) if name == "N"
    ));
}

#[test]
fn identical_redeclaration_collapses() {
    let decl = Declaration::new("+", "T")
        .kind("T", KindClass::Number)
        .kind("T", KindClass::Number)
        .param("T")
        .param("T");
    let rule = Rule::declare(&decl).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(rule.quantifiers().len(), 1);
}

#[test]
fn conflicting_redeclaration_is_rejected() {
    let decl = Declaration::new("+", "T")
        .kind("T", KindClass::Number)
        .kind("T", KindClass::Float)
        .param("T");
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::ConflictingQuantifier {
            operator: "+".to_owned(),
            name: "T".to_owned(),
            first: VarSort::Kind(KindClass::Number),
            second: VarSort::Kind(KindClass::Float),
        })
    );

    let decl = Declaration::new("+", "T")
        .kind("T", KindClass::Number)
        .dim("T")
        .param("T");
    assert!(matches!(
        Rule::declare(&decl),
        Err(DeclarationError::ConflictingQuantifier {
            second: VarSort::Dim,
            ..
        })
    ));
}

#[test]
fn sort_mismatches_are_rejected() {
    let decl = Declaration::new("+", "N").dim("N").param("N");
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::SortMismatch {
            operator: "+".to_owned(),
            name: "N".to_owned(),
            declared: VarSort::Dim,
            used: Position::Kind,
        })
    );

    let decl = Declaration::new("+", PatternDecl::vector("T", "T"))
        .kind("T", KindClass::Number)
        .param(PatternDecl::vector("T", "T"));
    assert!(matches!(
        Rule::declare(&decl),
        Err(DeclarationError::SortMismatch {
            used: Position::Dim,
            ..
        })
    ));
}

#[test]
fn matrix_elements_must_be_float_like() {
    let decl = Declaration::new("+", PatternDecl::matrix("i32", 2u32, 2u32))
        .param(PatternDecl::matrix("i32", 2u32, 2u32));
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::NonFloatMatrix {
            operator: "+".to_owned(),
            element: "i32".to_owned(),
        })
    );

    let decl = Declaration::new("+", PatternDecl::matrix("T", "C", "R"))
        .kind("T", KindClass::Integer)
        .dim("C")
        .dim("R")
        .param(PatternDecl::matrix("T", "C", "R"));
    assert!(matches!(
        Rule::declare(&decl),
        Err(DeclarationError::NonFloatMatrix { element, .. }) if element == "T"
    ));

    let decl = Declaration::new("+", PatternDecl::matrix("T", "C", "R"))
        .kind("T", KindClass::Float)
        .dim("C")
        .dim("R")
        .param(PatternDecl::matrix("T", "C", "R"));
    assert!(Rule::declare(&decl).is_ok());
}

#[test]
fn matrix_result_cannot_take_a_non_float_binding() {
    // T could be bound to i32 by the vector and then build mat2x2<i32>.
    let decl = Declaration::new("m", PatternDecl::matrix("T", "N", "N"))
        .kind("T", KindClass::Number)
        .dim("N")
        .param(PatternDecl::vector("T", "N"));
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::NonFloatMatrix {
            operator: "m".to_owned(),
            element: "T".to_owned(),
        })
    );

    let decl = Declaration::new("m", PatternDecl::matrix("T", "N", "N"))
        .kind("T", KindClass::Float)
        .dim("N")
        .param(PatternDecl::vector("T", "N"));
    assert!(Rule::declare(&decl).is_ok());
}

#[test]
fn nested_composites_are_rejected() {
    let decl = Declaration::new("+", "f32")
        .dim("N")
        .param(PatternDecl::vector(PatternDecl::vector("f32", "N"), "N"));
    assert_eq!(
        Rule::declare(&decl),
        Err(DeclarationError::NonScalarElement {
            operator: "+".to_owned()
        })
    );
}

#[test]
fn unused_quantifier_is_accepted() {
    let decl = Declaration::new("-", "T")
        .kind("T", KindClass::Signed)
        .dim("N")
        .param("T");
    let rule = Rule::declare(&decl).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(rule.quantifiers().len(), 2);
}
