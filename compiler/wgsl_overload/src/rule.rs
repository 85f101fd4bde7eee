//! Validated overload rules.
//!
//! A [`Rule`] can only be built from a [`Declaration`] through
//! [`Rule::declare`], which resolves names to `VarId`s and enforces the
//! declaration invariants:
//!
//! - at least one parameter;
//! - each name quantified once (identical re-declarations collapse);
//! - kind variables only in kind positions, dimension variables only in
//!   dimension positions;
//! - fixed dimensions in {2, 3, 4};
//! - vector and matrix elements are scalar patterns, and matrix elements
//!   are float-like for every possible binding (`f32`/`f16` literals or
//!   `Float(T)` variables);
//! - every result variable is bound by some parameter.
//!
//! The resolver relies on the last point: after all parameters unify, the
//! result always substitutes to a concrete type.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use wgsl_types::{
    Dim, DimPattern, KindVar, ScalarKind, ScalarPattern, TypePattern, VarId, VarNames,
};

use crate::decl::{Declaration, DimDecl, PatternDecl, QuantifierDecl};
use crate::error::{DeclarationError, Position, VarSort};

/// A quantified variable of a rule.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Quantifier {
    name: Box<str>,
    sort: VarSort,
}

impl Quantifier {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort(&self) -> VarSort {
        self.sort
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sort {
            VarSort::Kind(class) => write!(f, "{class}({})", self.name),
            VarSort::Dim => f.write_str(&self.name),
        }
    }
}

/// One overload of an operator.
///
/// Immutable once declared. Quantifier `i` is the variable with
/// `VarId::from_raw(i)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rule {
    operator: Box<str>,
    quantifiers: Vec<Quantifier>,
    params: Vec<TypePattern>,
    result: TypePattern,
}

impl Rule {
    /// Validate a declaration into a rule.
    pub fn declare(decl: &Declaration) -> Result<Self, DeclarationError> {
        Declarer::new(decl)?.finish()
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn quantifiers(&self) -> &[Quantifier] {
        &self.quantifiers
    }

    pub fn params(&self) -> &[TypePattern] {
        &self.params
    }

    pub fn result(&self) -> &TypePattern {
        &self.result
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl VarNames for Rule {
    fn var_name(&self, id: VarId) -> &str {
        self.quantifiers.get(id.index()).map_or("?", Quantifier::name)
    }
}

/// Renders the rule in declaration syntax.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type('{}', [", self.operator)?;
        for (i, quantifier) in self.quantifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{quantifier}")?;
        }
        f.write_str("], [")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param.display(self))?;
        }
        write!(f, "], {})", self.result.display(self))
    }
}

/// Name resolution state for one declaration.
struct Declarer<'d> {
    decl: &'d Declaration,
    quantifiers: Vec<Quantifier>,
    scope: FxHashMap<&'d str, VarId>,
}

impl<'d> Declarer<'d> {
    fn new(decl: &'d Declaration) -> Result<Self, DeclarationError> {
        let mut declarer = Self {
            decl,
            quantifiers: Vec::with_capacity(decl.quantifiers.len()),
            scope: FxHashMap::default(),
        };
        for quantifier in &decl.quantifiers {
            declarer.quantify(quantifier)?;
        }
        Ok(declarer)
    }

    fn quantify(&mut self, quantifier: &'d QuantifierDecl) -> Result<(), DeclarationError> {
        let name = quantifier.name();
        let sort = match quantifier {
            QuantifierDecl::Kind { class, .. } => VarSort::Kind(*class),
            QuantifierDecl::Dim { .. } => VarSort::Dim,
        };

        if let Some(&id) = self.scope.get(name) {
            let first = self.quantifiers[id.index()].sort;
            if first == sort {
                return Ok(());
            }
            return Err(DeclarationError::ConflictingQuantifier {
                operator: self.operator(),
                name: name.to_owned(),
                first,
                second: sort,
            });
        }

        let raw = u32::try_from(self.quantifiers.len()).unwrap_or(u32::MAX);
        self.scope.insert(name, VarId::from_raw(raw));
        self.quantifiers.push(Quantifier {
            name: name.into(),
            sort,
        });
        Ok(())
    }

    fn finish(self) -> Result<Rule, DeclarationError> {
        if self.decl.params.is_empty() {
            return Err(DeclarationError::EmptyParameterList {
                operator: self.operator(),
            });
        }

        let params = self
            .decl
            .params
            .iter()
            .map(|param| self.pattern(param))
            .collect::<Result<Vec<_>, _>>()?;
        let result = self.pattern(&self.decl.result)?;

        let mut bound = FxHashSet::default();
        for param in &params {
            param.for_each_var(|var| {
                bound.insert(var.id());
            });
        }
        let mut unbound = None;
        result.for_each_var(|var| {
            if unbound.is_none() && !bound.contains(&var.id()) {
                unbound = Some(var.id());
            }
        });
        if let Some(id) = unbound {
            return Err(DeclarationError::UnboundResultVariable {
                operator: self.operator(),
                name: self.quantifiers[id.index()].name.to_string(),
            });
        }

        Ok(Rule {
            operator: self.decl.operator.as_str().into(),
            quantifiers: self.quantifiers,
            params,
            result,
        })
    }

    fn operator(&self) -> String {
        self.decl.operator.clone()
    }

    fn pattern(&self, pattern: &PatternDecl) -> Result<TypePattern, DeclarationError> {
        match pattern {
            PatternDecl::Name(name) => Ok(TypePattern::Scalar(self.element(name)?)),
            PatternDecl::Vector(element, size) => Ok(TypePattern::Vector {
                element: self.nested_element(element)?,
                size: self.dim(size)?,
            }),
            PatternDecl::Matrix(element, cols, rows) => {
                let element = self.nested_element(element)?;
                let float_like = match element {
                    ScalarPattern::Var(KindVar { class, .. }) => class.admits_only_floats(),
                    ScalarPattern::Literal(kind) => kind.is_float(),
                };
                if !float_like {
                    return Err(DeclarationError::NonFloatMatrix {
                        operator: self.operator(),
                        element: self.element_name(element),
                    });
                }
                Ok(TypePattern::Matrix {
                    element,
                    cols: self.dim(cols)?,
                    rows: self.dim(rows)?,
                })
            }
        }
    }

    /// Element position of a vector or matrix: must be a plain name.
    fn nested_element(&self, element: &PatternDecl) -> Result<ScalarPattern, DeclarationError> {
        match element {
            PatternDecl::Name(name) => self.element(name),
            PatternDecl::Vector(..) | PatternDecl::Matrix(..) => {
                Err(DeclarationError::NonScalarElement {
                    operator: self.operator(),
                })
            }
        }
    }

    fn element(&self, name: &str) -> Result<ScalarPattern, DeclarationError> {
        if let Some(&id) = self.scope.get(name) {
            return match self.quantifiers[id.index()].sort {
                VarSort::Kind(class) => Ok(ScalarPattern::Var(KindVar { id, class })),
                declared @ VarSort::Dim => Err(DeclarationError::SortMismatch {
                    operator: self.operator(),
                    name: name.to_owned(),
                    declared,
                    used: Position::Kind,
                }),
            };
        }
        ScalarKind::from_wgsl_name(name)
            .map(ScalarPattern::Literal)
            .ok_or_else(|| DeclarationError::UndeclaredVariable {
                operator: self.operator(),
                name: name.to_owned(),
            })
    }

    fn dim(&self, dim: &DimDecl) -> Result<DimPattern, DeclarationError> {
        match dim {
            DimDecl::Fixed(value) => {
                Dim::new(*value)
                    .map(DimPattern::Fixed)
                    .ok_or_else(|| DeclarationError::InvalidDimension {
                        operator: self.operator(),
                        value: *value,
                    })
            }
            DimDecl::Name(name) => {
                let Some(&id) = self.scope.get(name.as_str()) else {
                    return Err(DeclarationError::UndeclaredVariable {
                        operator: self.operator(),
                        name: name.clone(),
                    });
                };
                match self.quantifiers[id.index()].sort {
                    VarSort::Dim => Ok(DimPattern::Var(id)),
                    declared @ VarSort::Kind(_) => Err(DeclarationError::SortMismatch {
                        operator: self.operator(),
                        name: name.clone(),
                        declared,
                        used: Position::Dim,
                    }),
                }
            }
        }
    }

    fn element_name(&self, element: ScalarPattern) -> String {
        match element {
            ScalarPattern::Var(var) => self.quantifiers[var.id.index()].name.to_string(),
            ScalarPattern::Literal(kind) => kind.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
