//! Pattern-against-value unification.
//!
//! Matches a rule's [`TypePattern`]s against concrete [`TypeValue`]s,
//! recording variable bindings in a [`Substitution`].
//!
//! # Design
//!
//! - One-sided: only patterns contain variables, so there is no occurs
//!   check and no union-find; a binding is set once and checked after.
//! - Bindings live in a slot vector indexed by `VarId`, sized to the rule's
//!   quantifier count. Rules have a handful of variables, so the slots stay
//!   inline.
//! - No promotion or broadcast. `f32 + vec3<f32>` only works because a
//!   separate rule with mixed parameter shapes is declared for it.
//!
//! # Usage
//!
//! ```ignore
//! let mut subst = Substitution::with_slots(rule.quantifiers().len());
//! unify_params(rule.params(), args, &mut subst)?;
//! let result = subst.apply(rule.result());
//! ```

mod error;

pub use error::{ParamMismatch, UnifyError};

use std::fmt;

use smallvec::{smallvec, SmallVec};
use wgsl_types::{Dim, DimPattern, ScalarKind, ScalarPattern, TypePattern, TypeValue, VarId};

/// Value bound to a pattern variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Binding {
    Kind(ScalarKind),
    Dim(Dim),
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "`{kind}`"),
            Self::Dim(dim) => write!(f, "dimension {dim}"),
        }
    }
}

/// Binding environment for one rule attempt.
///
/// Slots start unbound; unification fills them in. A fresh substitution is
/// created per candidate rule, so nothing leaks between attempts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Substitution {
    slots: SmallVec<[Option<Binding>; 4]>,
}

impl Substitution {
    /// Create an environment with `count` unbound slots.
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: smallvec![None; count],
        }
    }

    #[inline]
    pub fn get(&self, var: VarId) -> Option<Binding> {
        self.slots.get(var.index()).copied().flatten()
    }

    /// The kind bound to `var`, if it is a bound kind variable.
    pub fn kind(&self, var: VarId) -> Option<ScalarKind> {
        match self.get(var) {
            Some(Binding::Kind(kind)) => Some(kind),
            _ => None,
        }
    }

    /// The dimension bound to `var`, if it is a bound dimension variable.
    pub fn dim(&self, var: VarId) -> Option<Dim> {
        match self.get(var) {
            Some(Binding::Dim(dim)) => Some(dim),
            _ => None,
        }
    }

    /// Bound variables in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, Binding)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let raw = u32::try_from(index).ok()?;
            slot.map(|binding| (VarId::from_raw(raw), binding))
        })
    }

    /// Bind `var` if unbound; otherwise require the existing binding to match.
    fn bind(&mut self, var: VarId, found: Binding) -> Result<(), UnifyError> {
        let index = var.index();
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        match self.slots[index] {
            None => {
                self.slots[index] = Some(found);
                Ok(())
            }
            Some(bound) if bound == found => Ok(()),
            Some(bound) => Err(UnifyError::Conflict { var, bound, found }),
        }
    }

    /// Substitute bindings into `pattern`.
    ///
    /// Returns `None` if any variable in `pattern` is unbound, or bound to
    /// the wrong sort. Neither can happen for the result of a validated rule
    /// after its parameters unified.
    pub fn apply(&self, pattern: &TypePattern) -> Option<TypeValue> {
        match *pattern {
            TypePattern::Scalar(element) => self.apply_element(element).map(TypeValue::Scalar),
            TypePattern::Vector { element, size } => Some(TypeValue::Vector {
                kind: self.apply_element(element)?,
                size: self.apply_dim(size)?,
            }),
            TypePattern::Matrix {
                element,
                cols,
                rows,
            } => TypeValue::matrix(
                self.apply_element(element)?,
                self.apply_dim(cols)?,
                self.apply_dim(rows)?,
            )
            .ok(),
        }
    }

    fn apply_element(&self, element: ScalarPattern) -> Option<ScalarKind> {
        match element {
            ScalarPattern::Var(var) => self.kind(var.id),
            ScalarPattern::Literal(kind) => Some(kind),
        }
    }

    fn apply_dim(&self, dim: DimPattern) -> Option<Dim> {
        match dim {
            DimPattern::Var(var) => self.dim(var),
            DimPattern::Fixed(dim) => Some(dim),
        }
    }
}

/// Unify one pattern against one concrete type, extending `subst`.
///
/// On failure `subst` may hold bindings made before the mismatch was found;
/// callers discard it along with the rule.
pub fn unify(
    pattern: &TypePattern,
    value: &TypeValue,
    subst: &mut Substitution,
) -> Result<(), UnifyError> {
    match (*pattern, *value) {
        (TypePattern::Scalar(element), TypeValue::Scalar(kind)) => {
            unify_element(element, kind, subst)
        }
        (TypePattern::Vector { element, size }, TypeValue::Vector { kind, size: found }) => {
            unify_element(element, kind, subst)?;
            unify_dim(size, found, subst)
        }
        (
            TypePattern::Matrix {
                element,
                cols,
                rows,
            },
            TypeValue::Matrix {
                kind,
                cols: found_cols,
                rows: found_rows,
            },
        ) => {
            unify_element(element, kind, subst)?;
            unify_dim(cols, found_cols, subst)?;
            unify_dim(rows, found_rows, subst)
        }
        _ => Err(UnifyError::ShapeMismatch {
            expected: pattern.shape(),
            found: value.shape(),
        }),
    }
}

/// Unify parameters against arguments left to right.
///
/// Bindings accumulate across parameters, so a variable bound by an earlier
/// operand constrains later ones. Stops at the first mismatch. The caller
/// guarantees `params.len() == args.len()`; extra items on either side are
/// ignored.
pub fn unify_params(
    params: &[TypePattern],
    args: &[TypeValue],
    subst: &mut Substitution,
) -> Result<(), ParamMismatch> {
    for (index, (param, arg)) in params.iter().zip(args).enumerate() {
        unify(param, arg, subst).map_err(|error| ParamMismatch { index, error })?;
    }
    Ok(())
}

fn unify_element(
    element: ScalarPattern,
    kind: ScalarKind,
    subst: &mut Substitution,
) -> Result<(), UnifyError> {
    match element {
        ScalarPattern::Var(var) => {
            if !var.class.admits(kind) {
                return Err(UnifyError::KindNotAdmitted {
                    class: var.class,
                    found: kind,
                });
            }
            subst.bind(var.id, Binding::Kind(kind))
        }
        ScalarPattern::Literal(expected) if expected == kind => Ok(()),
        ScalarPattern::Literal(expected) => Err(UnifyError::KindMismatch {
            expected,
            found: kind,
        }),
    }
}

fn unify_dim(pattern: DimPattern, found: Dim, subst: &mut Substitution) -> Result<(), UnifyError> {
    match pattern {
        DimPattern::Var(var) => subst.bind(var, Binding::Dim(found)),
        DimPattern::Fixed(expected) if expected == found => Ok(()),
        DimPattern::Fixed(expected) => Err(UnifyError::DimMismatch { expected, found }),
    }
}
