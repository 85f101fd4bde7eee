//! Concrete WGSL value types.
//!
//! A `TypeValue` is what the type-checking pass hands to overload
//! resolution for each operand, and what resolution hands back as the
//! result. Values are small `Copy` data with structural equality.

use std::fmt;

use crate::{Dim, ScalarKind};

/// A concrete scalar, vector, or matrix type.
///
/// Build matrices through [`TypeValue::matrix`], which rejects non-float
/// element kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeValue {
    /// `bool`, `i32`, `u32`, `f32`, `f16`.
    Scalar(ScalarKind),
    /// `vecN<T>`.
    Vector { kind: ScalarKind, size: Dim },
    /// `matCxR<T>`: `cols` columns of `rows`-element vectors.
    Matrix { kind: ScalarKind, cols: Dim, rows: Dim },
}

impl TypeValue {
    #[inline]
    pub const fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    #[inline]
    pub const fn vector(kind: ScalarKind, size: Dim) -> Self {
        Self::Vector { kind, size }
    }

    /// Create a matrix type. Only float-like element kinds are allowed.
    pub const fn matrix(kind: ScalarKind, cols: Dim, rows: Dim) -> Result<Self, NonFloatMatrix> {
        if kind.is_float() {
            Ok(Self::Matrix { kind, cols, rows })
        } else {
            Err(NonFloatMatrix(kind))
        }
    }

    /// The scalar kind of this type, or of its elements.
    #[inline]
    pub const fn element_kind(&self) -> ScalarKind {
        match *self {
            Self::Scalar(kind) | Self::Vector { kind, .. } | Self::Matrix { kind, .. } => kind,
        }
    }

    #[inline]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Vector { .. } => Shape::Vector,
            Self::Matrix { .. } => Shape::Matrix,
        }
    }
}

impl From<ScalarKind> for TypeValue {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl fmt::Display for TypeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Vector { kind, size } => write!(f, "vec{size}<{kind}>"),
            Self::Matrix { kind, cols, rows } => write!(f, "mat{cols}x{rows}<{kind}>"),
        }
    }
}

/// The outer constructor of a type, ignoring kinds and dimensions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    Scalar,
    Vector,
    Matrix,
}

impl Shape {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
            Self::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a matrix built over a non-float kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NonFloatMatrix(pub ScalarKind);

impl fmt::Display for NonFloatMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix elements must be f32 or f16, found {}", self.0)
    }
}

impl std::error::Error for NonFloatMatrix {}
