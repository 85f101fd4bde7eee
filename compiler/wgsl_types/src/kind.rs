//! Scalar kinds and the classes that constrain kind variables.
//!
//! A `ScalarKind` is the element kind of every WGSL value type this crate
//! models. A `KindClass` is a capability check over kinds: a kind variable
//! declared as `Number(T)` binds to any kind its class admits.
//!
//! Classes are predicates, not a hierarchy. `Float` happens to admit a
//! subset of what `Number` admits, but nothing relies on that ordering.

use std::fmt;

/// Element kind of a scalar, vector, or matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    /// `bool`.
    Bool,
    /// `i32`.
    Int,
    /// `u32`.
    UInt,
    /// `f32`.
    Float,
    /// `f16` (requires `enable f16;`).
    Half,
}

impl ScalarKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [Self::Bool, Self::Int, Self::UInt, Self::Float, Self::Half];

    /// The numeric kinds (everything but `bool`).
    pub const NUMERIC: [Self; 4] = [Self::Int, Self::UInt, Self::Float, Self::Half];

    /// The float-like kinds, the only kinds a matrix may hold.
    pub const FLOATS: [Self; 2] = [Self::Float, Self::Half];

    /// The WGSL spelling of this kind.
    pub const fn wgsl_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "i32",
            Self::UInt => "u32",
            Self::Float => "f32",
            Self::Half => "f16",
        }
    }

    /// Parse a WGSL scalar type name.
    pub fn from_wgsl_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wgsl_name() == name)
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Half)
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::UInt)
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Half)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wgsl_name())
    }
}

/// The set of kinds a kind variable may bind to.
///
/// Appears in declarations as the wrapper around a quantified name:
/// `Number(T)`, `Float(T)`, and so on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KindClass {
    /// Any scalar kind, including `bool`.
    Scalar,
    /// `i32`, `u32`, `f32`, `f16`.
    Number,
    /// `i32`, `f32`, `f16`.
    Signed,
    /// `i32`, `u32`.
    Integer,
    /// `f32`, `f16`.
    Float,
}

impl KindClass {
    pub const ALL: [Self; 5] = [
        Self::Scalar,
        Self::Number,
        Self::Signed,
        Self::Integer,
        Self::Float,
    ];

    /// Check whether a variable of this class may bind to `kind`.
    #[inline]
    pub const fn admits(self, kind: ScalarKind) -> bool {
        match self {
            Self::Scalar => true,
            Self::Number => kind.is_numeric(),
            Self::Signed => kind.is_signed(),
            Self::Integer => kind.is_integer(),
            Self::Float => kind.is_float(),
        }
    }

    /// Check whether every kind this class admits is float-like.
    ///
    /// Matrix element variables must pass this check: a matrix substituted
    /// from the variable's binding has to be a valid matrix type.
    pub fn admits_only_floats(self) -> bool {
        ScalarKind::ALL
            .into_iter()
            .all(|kind| kind.is_float() || !self.admits(kind))
    }

    /// The declaration-syntax name of this class.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Number => "Number",
            Self::Signed => "Signed",
            Self::Integer => "Integer",
            Self::Float => "Float",
        }
    }

    /// Parse a declaration-syntax class name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

impl fmt::Display for KindClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
