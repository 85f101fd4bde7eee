//! Declaration and resolution errors.
//!
//! `DeclarationError` aborts table construction; it never reaches query
//! time. `ResolveError` is returned to the type-checking pass, which owns
//! source locations and turns it into a user-facing diagnostic.

use std::fmt;

use wgsl_types::{KindClass, ScalarKind, TypeValue};

use crate::decl::Span;

/// A rule declaration that cannot be turned into a valid rule.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DeclarationError {
    /// Malformed arity: operators take at least one operand.
    #[error("`{operator}`: declaration has no parameters")]
    EmptyParameterList { operator: String },

    /// The same name quantified twice with different sorts or classes.
    #[error("`{operator}`: `{name}` declared as {first} and again as {second}")]
    ConflictingQuantifier {
        operator: String,
        name: String,
        first: VarSort,
        second: VarSort,
    },

    /// A name that is neither quantified nor a scalar type.
    #[error("`{operator}`: `{name}` is not a declared variable or scalar type")]
    UndeclaredVariable { operator: String, name: String },

    /// A kind variable in a dimension position, or vice versa.
    #[error("`{operator}`: `{name}` is a {declared} but is used in a {used} position")]
    SortMismatch {
        operator: String,
        name: String,
        declared: VarSort,
        used: Position,
    },

    /// A result variable that no parameter binds.
    #[error("`{operator}`: result variable `{name}` is not bound by any parameter")]
    UnboundResultVariable { operator: String, name: String },

    #[error("`{operator}`: invalid dimension {value}, expected 2, 3 or 4")]
    InvalidDimension { operator: String, value: u32 },

    /// A vector or matrix element that is itself a vector or matrix.
    #[error("`{operator}`: vector and matrix elements must be scalars")]
    NonScalarElement { operator: String },

    /// A matrix element pattern that could bind a non-float kind.
    #[error("`{operator}`: matrix element `{element}` must be `Float(T)`, `f32` or `f16`")]
    NonFloatMatrix { operator: String, element: String },

    /// Malformed declaration text.
    #[error("syntax error at {span}: {message}")]
    Syntax { message: String, span: Span },
}

/// What a quantified name was declared as.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VarSort {
    Kind(KindClass),
    Dim,
}

impl fmt::Display for VarSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(class) => write!(f, "{class} kind variable"),
            Self::Dim => f.write_str("dimension variable"),
        }
    }
}

/// Where in a pattern a name was used.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Position {
    Kind,
    Dim,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind => f.write_str("kind"),
            Self::Dim => f.write_str("dimension"),
        }
    }
}

/// Failure to resolve an operator application.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// No rule is registered for this operator with this many operands.
    #[error("no overload of `{operator}` takes {arity} argument{}", plural(.arity))]
    NoOverload { operator: String, arity: usize },

    /// Rules exist for the arity, but none unify with the arguments.
    #[error("no overload of `{operator}` accepts ({})", TypeList(.args))]
    NoMatchingOverload {
        operator: String,
        args: Vec<TypeValue>,
    },

    /// An argument uses a kind whose extension is not enabled.
    #[error("`{kind}` requires `enable {extension};`")]
    ExtensionRequired {
        kind: ScalarKind,
        extension: &'static str,
    },
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

/// Comma-separated argument types.
struct TypeList<'a>(&'a [TypeValue]);

impl fmt::Display for TypeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ty) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        Ok(())
    }
}
