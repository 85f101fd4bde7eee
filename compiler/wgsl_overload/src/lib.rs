//! Overload resolution for WGSL operators.
//!
//! Operators are described by generic rules such as
//!
//! ```text
//! type('+', [Number(T), N], [Vector(T, N), T], Vector(T, N))
//! ```
//!
//! read as "for any numeric kind `T` and dimension `N`, `vecN<T> + T` is a
//! `vecN<T>`". The pipeline:
//!
//! - `decl`: declarations with named variables, built in code or parsed
//!   from declaration text.
//! - `rule`: validation of a declaration into a `Rule` with numbered
//!   variables.
//! - `table`: rules indexed by operator and arity, immutable once built.
//! - `unify`: one-sided matching of patterns against concrete types.
//! - `resolve`: first-match-wins selection of a rule for an application.
//!
//! ```
//! use wgsl_overload::{Resolver, RuleTable};
//! use wgsl_types::{Dim, ScalarKind, TypeValue};
//!
//! let table = RuleTable::wgsl_operators().unwrap();
//! let resolver = Resolver::new(&table);
//! let vec3 = TypeValue::vector(ScalarKind::Float, Dim::THREE);
//! let result = resolver.resolve("+", &[vec3, TypeValue::scalar(ScalarKind::Float)]);
//! assert_eq!(result, Ok(vec3));
//! ```

mod catalog;
mod decl;
mod error;
mod resolve;
mod rule;
mod table;
mod unify;

use std::sync::Once;

pub use catalog::WGSL_OPERATORS;
pub use decl::{parse_declarations, Declaration, DimDecl, PatternDecl, QuantifierDecl, Span};
pub use error::{DeclarationError, Position, ResolveError, VarSort};
pub use resolve::{Extensions, Resolved, Resolver, ResolverOptions};
pub use rule::{Quantifier, Rule};
pub use table::{RuleTable, RuleTableBuilder};
pub use unify::{unify, unify_params, Binding, ParamMismatch, Substitution, UnifyError};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only runs once per process.
/// `RUST_LOG=wgsl_overload=trace` logs every rejected candidate.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
