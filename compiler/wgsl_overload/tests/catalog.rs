//! Catalog-level checks: rendering, reloading, and custom tables.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use wgsl_overload::{
    parse_declarations, DeclarationError, Declaration, PatternDecl, Resolver, Rule, RuleTable,
    WGSL_OPERATORS,
};
use wgsl_types::{Dim, KindClass, ScalarKind, TypeValue};

#[test]
fn every_rule_renders_as_loadable_declaration_text() {
    let table = RuleTable::wgsl_operators().unwrap();
    for rule in table.iter() {
        let text = rule.to_string();
        let reloaded = RuleTable::from_source(&text).unwrap();
        assert_eq!(reloaded.lookup(rule.operator(), rule.arity()), std::slice::from_ref(rule));
    }
}

#[test]
fn catalog_text_parses_to_one_declaration_per_rule() {
    let decls = parse_declarations(WGSL_OPERATORS).unwrap();
    let table = RuleTable::wgsl_operators().unwrap();
    assert_eq!(decls.len(), table.len());
}

#[test]
fn custom_table_from_code_and_text() {
    let mut builder = RuleTable::builder();
    builder
        .load_source("type('dot', [Float(T), N], [Vector(T, N), Vector(T, N)], T)")
        .unwrap();
    let decl = Declaration::new("cross", PatternDecl::vector("T", 3u32))
        .kind("T", KindClass::Float)
        .param(PatternDecl::vector("T", 3u32))
        .param(PatternDecl::vector("T", 3u32));
    builder.register(&decl).unwrap();
    let table = builder.build();

    let resolver = Resolver::new(&table);
    let vec3 = TypeValue::vector(ScalarKind::Float, Dim::THREE);
    assert_eq!(
        resolver.resolve("dot", &[vec3, vec3]),
        Ok(TypeValue::scalar(ScalarKind::Float))
    );
    assert_eq!(resolver.resolve("cross", &[vec3, vec3]), Ok(vec3));

    let vec2 = TypeValue::vector(ScalarKind::Float, Dim::TWO);
    assert!(resolver.resolve("cross", &[vec2, vec2]).is_err());
}

#[test]
fn declaration_errors_name_the_operator() {
    let err = RuleTable::from_source("type('+', [Number(T), N], [T], Vector(T, N))").unwrap_err();
    assert_eq!(
        err.to_string(),
        "`+`: result variable `N` is not bound by any parameter"
    );

    let err = Rule::declare(&Declaration::new("neg", "f32")).unwrap_err();
    assert_eq!(
        err,
        DeclarationError::EmptyParameterList {
            operator: "neg".to_owned()
        }
    );
}

#[test]
fn resolved_types_survive_serialization() {
    let table = RuleTable::wgsl_operators().unwrap();
    let resolver = Resolver::new(&table);
    let mat = TypeValue::matrix(ScalarKind::Float, Dim::FOUR, Dim::TWO).unwrap();
    let result = resolver
        .resolve("*", &[mat, TypeValue::vector(ScalarKind::Float, Dim::FOUR)])
        .unwrap();

    let bytes = bincode::serialize(&result).unwrap();
    let decoded: TypeValue = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, TypeValue::vector(ScalarKind::Float, Dim::TWO));

    // Dimensions are validated on the way back in.
    assert!(bincode::deserialize::<Dim>(&bincode::serialize(&5u8).unwrap()).is_err());
}
