//! Type patterns for overload rule declarations.
//!
//! Patterns mirror the shape of [`TypeValue`](crate::TypeValue) but allow
//! kind and dimension positions to hold variables. Variables are numbered
//! per rule (`VarId`) in the order their quantifiers were declared, so a
//! binding environment can be a flat slot vector instead of a name map.
//!
//! # Structure
//!
//! ```text
//! TypePattern
//!   ├── Scalar(ScalarPattern)           T, bool
//!   ├── Vector { element, size }        Vector(T, N)
//!   └── Matrix { element, cols, rows }  Matrix(T, C, R)
//!
//! ScalarPattern = Var(KindVar) | Literal(ScalarKind)
//! DimPattern    = Var(VarId)   | Fixed(Dim)
//! ```
//!
//! Element positions only ever hold a `ScalarPattern`; WGSL has no vectors
//! of vectors, and the closed sum type keeps that unrepresentable.

use std::fmt;

use crate::{Dim, KindClass, ScalarKind, Shape};

/// Index of a quantified variable within one rule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct VarId(u32);

impl VarId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Slot index for binding environments.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A kind variable occurrence, carrying the class it was quantified with.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KindVar {
    pub id: VarId,
    pub class: KindClass,
}

/// Pattern for a scalar or for the element kind of a vector/matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarPattern {
    /// Binds to any kind the variable's class admits.
    Var(KindVar),
    /// Matches exactly this kind.
    Literal(ScalarKind),
}

/// Pattern for a vector size or matrix column/row count.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DimPattern {
    Var(VarId),
    Fixed(Dim),
}

/// A type shape with variable kind and dimension positions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypePattern {
    Scalar(ScalarPattern),
    Vector {
        element: ScalarPattern,
        size: DimPattern,
    },
    Matrix {
        element: ScalarPattern,
        cols: DimPattern,
        rows: DimPattern,
    },
}

/// A variable occurrence found while walking a pattern.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PatternVar {
    Kind(KindVar),
    Dim(VarId),
}

impl PatternVar {
    #[inline]
    pub const fn id(self) -> VarId {
        match self {
            Self::Kind(var) => var.id,
            Self::Dim(id) => id,
        }
    }
}

impl TypePattern {
    /// `Number(T)`-style pattern: a bare kind variable.
    pub const fn kind_var(id: VarId, class: KindClass) -> Self {
        Self::Scalar(ScalarPattern::Var(KindVar { id, class }))
    }

    pub const fn literal(kind: ScalarKind) -> Self {
        Self::Scalar(ScalarPattern::Literal(kind))
    }

    #[inline]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Vector { .. } => Shape::Vector,
            Self::Matrix { .. } => Shape::Matrix,
        }
    }

    /// Element-kind pattern of this type (the scalar itself for scalars).
    #[inline]
    pub const fn element(&self) -> ScalarPattern {
        match *self {
            Self::Scalar(element)
            | Self::Vector { element, .. }
            | Self::Matrix { element, .. } => element,
        }
    }

    /// Visit every variable occurrence, left to right.
    pub fn for_each_var(&self, mut f: impl FnMut(PatternVar)) {
        if let ScalarPattern::Var(var) = self.element() {
            f(PatternVar::Kind(var));
        }
        let (first, second) = match *self {
            Self::Scalar(_) => (None, None),
            Self::Vector { size, .. } => (Some(size), None),
            Self::Matrix { cols, rows, .. } => (Some(cols), Some(rows)),
        };
        for dim in first.into_iter().chain(second) {
            if let DimPattern::Var(id) = dim {
                f(PatternVar::Dim(id));
            }
        }
    }

    /// Collect variable occurrences, left to right, duplicates included.
    pub fn vars(&self) -> Vec<PatternVar> {
        let mut vars = Vec::new();
        self.for_each_var(|var| vars.push(var));
        vars
    }

    /// Render this pattern in declaration syntax, using `names` for variables.
    pub fn display<'a, N: VarNames + ?Sized>(&'a self, names: &'a N) -> PatternDisplay<'a, N> {
        PatternDisplay {
            pattern: self,
            names,
        }
    }
}

/// Supplies the source names of a rule's variables for display.
pub trait VarNames {
    fn var_name(&self, id: VarId) -> &str;
}

impl<S: AsRef<str>> VarNames for [S] {
    fn var_name(&self, id: VarId) -> &str {
        self.get(id.index()).map_or("?", AsRef::as_ref)
    }
}

/// Display adapter returned by [`TypePattern::display`].
pub struct PatternDisplay<'a, N: ?Sized> {
    pattern: &'a TypePattern,
    names: &'a N,
}

impl<N: VarNames + ?Sized> PatternDisplay<'_, N> {
    fn write_element(&self, f: &mut fmt::Formatter<'_>, element: ScalarPattern) -> fmt::Result {
        match element {
            ScalarPattern::Var(var) => f.write_str(self.names.var_name(var.id)),
            ScalarPattern::Literal(kind) => write!(f, "{kind}"),
        }
    }

    fn write_dim(&self, f: &mut fmt::Formatter<'_>, dim: DimPattern) -> fmt::Result {
        match dim {
            DimPattern::Var(id) => f.write_str(self.names.var_name(id)),
            DimPattern::Fixed(dim) => write!(f, "{dim}"),
        }
    }
}

impl<N: VarNames + ?Sized> fmt::Display for PatternDisplay<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.pattern {
            TypePattern::Scalar(element) => self.write_element(f, element),
            TypePattern::Vector { element, size } => {
                f.write_str("Vector(")?;
                self.write_element(f, element)?;
                f.write_str(", ")?;
                self.write_dim(f, size)?;
                f.write_str(")")
            }
            TypePattern::Matrix {
                element,
                cols,
                rows,
            } => {
                f.write_str("Matrix(")?;
                self.write_element(f, element)?;
                f.write_str(", ")?;
                self.write_dim(f, cols)?;
                f.write_str(", ")?;
                self.write_dim(f, rows)?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests;
