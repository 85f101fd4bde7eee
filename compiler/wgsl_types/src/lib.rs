//! WGSL value types and overload rule patterns.
//!
//! Two representations live here:
//! - `TypeValue`: concrete scalar, vector and matrix types, produced per
//!   type-checking query.
//! - `TypePattern`: the same shapes with kind and dimension variables, used
//!   by overload rule declarations.
//!
//! Matching patterns against values happens in `wgsl_overload`; this crate
//! only defines the data.

mod dim;
mod kind;
mod pattern;
mod value;

pub use dim::{Dim, InvalidDim};
pub use kind::{KindClass, ScalarKind};
pub use pattern::{
    DimPattern, KindVar, PatternDisplay, PatternVar, ScalarPattern, TypePattern, VarId, VarNames,
};
pub use value::{NonFloatMatrix, Shape, TypeValue};

// Size assertions to prevent accidental regressions.
// Values are passed by copy through every resolution query.
#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(std::mem::size_of::<TypeValue>() <= 4);
    assert!(std::mem::size_of::<VarId>() == 4);
};
