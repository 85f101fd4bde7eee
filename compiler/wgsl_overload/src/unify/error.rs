//! Unification failures.
//!
//! These are ordinary values: a failed unification means "this rule does
//! not apply", and the resolver moves on to the next candidate.

use wgsl_types::{Dim, KindClass, ScalarKind, Shape, VarId};

use super::Binding;

/// Why one pattern did not match one concrete type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum UnifyError {
    /// Scalar pattern against a vector, vector against a matrix, and so on.
    #[error("expected a {expected}, found a {found}")]
    ShapeMismatch { expected: Shape, found: Shape },

    /// The variable's class does not admit the concrete kind.
    #[error("{class} variable cannot bind `{found}`")]
    KindNotAdmitted { class: KindClass, found: ScalarKind },

    /// A literal kind in the pattern differs from the concrete kind.
    #[error("expected `{expected}`, found `{found}`")]
    KindMismatch {
        expected: ScalarKind,
        found: ScalarKind,
    },

    /// A fixed dimension in the pattern differs from the concrete one.
    #[error("expected dimension {expected}, found {found}")]
    DimMismatch { expected: Dim, found: Dim },

    /// A variable already bound by an earlier position disagrees.
    #[error("variable #{} is bound to {bound}, found {found}", .var.raw())]
    Conflict {
        var: VarId,
        bound: Binding,
        found: Binding,
    },
}

/// A unification failure at a specific parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("parameter {index}: {error}")]
pub struct ParamMismatch {
    /// Zero-based parameter index.
    pub index: usize,
    #[source]
    pub error: UnifyError,
}
