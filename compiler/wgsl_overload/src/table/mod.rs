//! The rule table: overload rules indexed by operator and arity.
//!
//! Built once through [`RuleTableBuilder`], then immutable. Within one
//! `(operator, arity)` key, rules keep their registration order; the
//! resolver tries them in that order and the first match wins.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::decl::{parse_declarations, Declaration};
use crate::error::DeclarationError;
use crate::rule::Rule;

type ByArity = BTreeMap<usize, Vec<Rule>>;

/// Immutable overload rules.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: FxHashMap<Box<str>, ByArity>,
    len: usize,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// Build a table from declaration text.
    ///
    /// The first syntax or validation error aborts construction.
    pub fn from_source(source: &str) -> Result<Self, DeclarationError> {
        let mut builder = RuleTableBuilder::new();
        builder.load_source(source)?;
        Ok(builder.build())
    }

    /// Rules for `operator` taking `arity` operands, in registration order.
    ///
    /// Unknown operators and arities give an empty slice.
    pub fn lookup(&self, operator: &str, arity: usize) -> &[Rule] {
        self.rules
            .get(operator)
            .and_then(|by_arity| by_arity.get(&arity))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every operator with at least one rule, sorted.
    pub fn operators(&self) -> Vec<&str> {
        let mut operators: Vec<&str> = self.rules.keys().map(|op| &**op).collect();
        operators.sort_unstable();
        operators
    }

    /// Arities declared for `operator`, ascending.
    pub fn arities(&self, operator: &str) -> impl Iterator<Item = usize> + '_ {
        self.rules
            .get(operator)
            .into_iter()
            .flat_map(BTreeMap::keys)
            .copied()
    }

    /// All rules, grouped by operator then arity.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values().flat_map(BTreeMap::values).flatten()
    }
}

/// Accumulates validated rules for a [`RuleTable`].
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    rules: FxHashMap<Box<str>, ByArity>,
    len: usize,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `decl` and append it after any rules already registered
    /// for the same operator and arity.
    pub fn register(&mut self, decl: &Declaration) -> Result<(), DeclarationError> {
        let rule = Rule::declare(decl)?;
        tracing::trace!(%rule, "registered rule");
        self.rules
            .entry(rule.operator().into())
            .or_default()
            .entry(rule.arity())
            .or_default()
            .push(rule);
        self.len += 1;
        Ok(())
    }

    /// Register declarations in iteration order, stopping at the first error.
    pub fn register_all<'a>(
        &mut self,
        decls: impl IntoIterator<Item = &'a Declaration>,
    ) -> Result<(), DeclarationError> {
        decls.into_iter().try_for_each(|decl| self.register(decl))
    }

    /// Parse declaration text and register every declaration in it.
    ///
    /// Nothing from `source` is registered if it fails to parse.
    pub fn load_source(&mut self, source: &str) -> Result<(), DeclarationError> {
        let decls = parse_declarations(source)?;
        tracing::debug!(declarations = decls.len(), "loading declaration text");
        self.register_all(&decls)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Freeze the table.
    pub fn build(self) -> RuleTable {
        tracing::debug!(
            rules = self.len,
            operators = self.rules.len(),
            "built rule table"
        );
        RuleTable {
            rules: self.rules,
            len: self.len,
        }
    }
}
