use pretty_assertions::assert_eq;

use super::*;

const T: VarId = VarId::from_raw(0);
const C: VarId = VarId::from_raw(1);
const R: VarId = VarId::from_raw(2);

fn float_t() -> ScalarPattern {
    ScalarPattern::Var(KindVar {
        id: T,
        class: KindClass::Float,
    })
}

#[test]
fn vars_are_listed_left_to_right() {
    let matrix = TypePattern::Matrix {
        element: float_t(),
        cols: DimPattern::Var(C),
        rows: DimPattern::Var(R),
    };
    assert_eq!(
        matrix.vars(),
        vec![
            PatternVar::Kind(KindVar {
                id: T,
                class: KindClass::Float
            }),
            PatternVar::Dim(C),
            PatternVar::Dim(R),
        ]
    );
}

#[test]
fn literals_and_fixed_dims_have_no_vars() {
    let pattern = TypePattern::Vector {
        element: ScalarPattern::Literal(ScalarKind::Bool),
        size: DimPattern::Fixed(Dim::THREE),
    };
    assert!(pattern.vars().is_empty());
    assert!(TypePattern::literal(ScalarKind::UInt).vars().is_empty());
}

#[test]
fn display_in_declaration_syntax() {
    let names = ["T", "C", "R"];
    let matrix = TypePattern::Matrix {
        element: float_t(),
        cols: DimPattern::Var(C),
        rows: DimPattern::Fixed(Dim::TWO),
    };
    assert_eq!(matrix.display(&names[..]).to_string(), "Matrix(T, C, 2)");

    let vector = TypePattern::Vector {
        element: ScalarPattern::Literal(ScalarKind::Bool),
        size: DimPattern::Var(R),
    };
    assert_eq!(vector.display(&names[..]).to_string(), "Vector(bool, R)");

    let scalar = TypePattern::kind_var(T, KindClass::Number);
    assert_eq!(scalar.display(&names[..]).to_string(), "T");
}

#[test]
fn shape_and_element() {
    let vector = TypePattern::Vector {
        element: float_t(),
        size: DimPattern::Var(C),
    };
    assert_eq!(vector.shape(), Shape::Vector);
    assert_eq!(vector.element(), float_t());
}
