//! Rule declarations: the registration surface of the rule table.
//!
//! A `Declaration` names its variables with strings, the way a catalog
//! author writes them. The table validates it into a [`Rule`](crate::Rule),
//! resolving names to `VarId`s.
//!
//! Declarations can be built in code:
//!
//! ```
//! use wgsl_overload::{Declaration, PatternDecl};
//! use wgsl_types::KindClass;
//!
//! let decl = Declaration::new("+", PatternDecl::vector("T", "N"))
//!     .kind("T", KindClass::Number)
//!     .dim("N")
//!     .param(PatternDecl::vector("T", "N"))
//!     .param("T");
//! assert_eq!(decl.params.len(), 2);
//! ```
//!
//! or parsed from declaration text with [`parse_declarations`]:
//!
//! ```text
//! type('+', [Number(T), N], [Vector(T, N), T], Vector(T, N))
//! ```

mod lexer;
mod parser;

pub use parser::parse_declarations;

use std::fmt;

use wgsl_types::KindClass;

/// One overload, with variables referenced by name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Declaration {
    pub operator: String,
    pub quantifiers: Vec<QuantifierDecl>,
    pub params: Vec<PatternDecl>,
    pub result: PatternDecl,
}

impl Declaration {
    /// Start a declaration with no quantifiers or parameters.
    pub fn new(operator: impl Into<String>, result: impl Into<PatternDecl>) -> Self {
        Self {
            operator: operator.into(),
            quantifiers: Vec::new(),
            params: Vec::new(),
            result: result.into(),
        }
    }

    /// Quantify a kind variable, e.g. `Number(T)`.
    #[must_use]
    pub fn kind(mut self, name: impl Into<String>, class: KindClass) -> Self {
        self.quantifiers.push(QuantifierDecl::Kind {
            name: name.into(),
            class,
        });
        self
    }

    /// Quantify a dimension variable, e.g. `N`.
    #[must_use]
    pub fn dim(mut self, name: impl Into<String>) -> Self {
        self.quantifiers
            .push(QuantifierDecl::Dim { name: name.into() });
        self
    }

    #[must_use]
    pub fn param(mut self, pattern: impl Into<PatternDecl>) -> Self {
        self.params.push(pattern.into());
        self
    }
}

/// A quantified variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QuantifierDecl {
    /// `Number(T)`, `Float(T)`, ...
    Kind { name: String, class: KindClass },
    /// A bare name: `N`, `C`, `R`.
    Dim { name: String },
}

impl QuantifierDecl {
    pub fn name(&self) -> &str {
        match self {
            Self::Kind { name, .. } | Self::Dim { name } => name,
        }
    }
}

/// A type pattern with named variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PatternDecl {
    /// A kind variable or a scalar type name (`bool`, `u32`, ...).
    Name(String),
    Vector(Box<PatternDecl>, DimDecl),
    Matrix(Box<PatternDecl>, DimDecl, DimDecl),
}

impl PatternDecl {
    pub fn vector(element: impl Into<PatternDecl>, size: impl Into<DimDecl>) -> Self {
        Self::Vector(Box::new(element.into()), size.into())
    }

    pub fn matrix(
        element: impl Into<PatternDecl>,
        cols: impl Into<DimDecl>,
        rows: impl Into<DimDecl>,
    ) -> Self {
        Self::Matrix(Box::new(element.into()), cols.into(), rows.into())
    }
}

impl From<&str> for PatternDecl {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

/// A dimension position: a variable name or a literal size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DimDecl {
    Name(String),
    Fixed(u32),
}

impl From<&str> for DimDecl {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<u32> for DimDecl {
    fn from(n: u32) -> Self {
        Self::Fixed(n)
    }
}

/// Byte range in declaration text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Self {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        }
    }

    pub const fn point(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
