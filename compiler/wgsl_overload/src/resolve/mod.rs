//! Operator overload resolution.
//!
//! Given an operator and concrete argument types, [`Resolver`] tries the
//! table's rules for that operator and arity in registration order. Each
//! attempt starts from a fresh [`Substitution`]; the first rule whose
//! parameters all unify wins and its result is substituted. There is no
//! specificity ranking and no ambiguity detection, so catalog order is the
//! only tie-breaker.

mod options;

pub use options::{Extensions, ResolverOptions};

use wgsl_types::TypeValue;

use crate::error::ResolveError;
use crate::rule::Rule;
use crate::table::RuleTable;
use crate::unify::{unify_params, Substitution};

/// A successful resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolved<'t> {
    /// The operator's result type.
    pub result: TypeValue,
    /// The overload that matched.
    pub rule: &'t Rule,
    /// Variable bindings from unifying `rule`'s parameters.
    pub substitution: Substitution,
}

/// Resolves operator applications against a [`RuleTable`].
///
/// Stateless between calls; the same query always gives the same answer.
#[derive(Copy, Clone, Debug)]
pub struct Resolver<'t> {
    table: &'t RuleTable,
    options: ResolverOptions,
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self::with_options(table, ResolverOptions::default())
    }

    pub fn with_options(table: &'t RuleTable, options: ResolverOptions) -> Self {
        Self { table, options }
    }

    pub fn table(&self) -> &'t RuleTable {
        self.table
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Rules considered for `operator` with `arity` operands, in the order
    /// they are tried.
    pub fn candidates(&self, operator: &str, arity: usize) -> &'t [Rule] {
        self.table.lookup(operator, arity)
    }

    /// Result type of applying `operator` to `args`.
    pub fn resolve(&self, operator: &str, args: &[TypeValue]) -> Result<TypeValue, ResolveError> {
        self.resolve_overload(operator, args)
            .map(|resolved| resolved.result)
    }

    /// Like [`resolve`](Self::resolve), but also reports which rule matched
    /// and how its variables were bound.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve_overload(
        &self,
        operator: &str,
        args: &[TypeValue],
    ) -> Result<Resolved<'t>, ResolveError> {
        let candidates = self.candidates(operator, args.len());
        if candidates.is_empty() {
            return Err(ResolveError::NoOverload {
                operator: operator.to_owned(),
                arity: args.len(),
            });
        }
        self.check_extensions(args)?;

        for rule in candidates {
            let mut substitution = Substitution::with_slots(rule.quantifiers().len());
            if let Err(mismatch) = unify_params(rule.params(), args, &mut substitution) {
                tracing::trace!(%rule, %mismatch, "candidate rejected");
                continue;
            }
            // Validated rules bind every result variable through their
            // parameters, so this only fails on a broken invariant.
            let Some(result) = substitution.apply(rule.result()) else {
                tracing::error!(%rule, "result did not substitute after parameters unified");
                continue;
            };
            tracing::trace!(%rule, %result, "resolved");
            return Ok(Resolved {
                result,
                rule,
                substitution,
            });
        }

        Err(ResolveError::NoMatchingOverload {
            operator: operator.to_owned(),
            args: args.to_vec(),
        })
    }

    fn check_extensions(&self, args: &[TypeValue]) -> Result<(), ResolveError> {
        for arg in args {
            let kind = arg.element_kind();
            if let Some((required, extension)) = Extensions::required_by(kind) {
                if !self.options.extensions.contains(required) {
                    return Err(ResolveError::ExtensionRequired { kind, extension });
                }
            }
        }
        Ok(())
    }
}
