//! Built-in WGSL operator rules.
//!
//! Rules are listed in resolution order. Mixed scalar/vector forms are
//! declared explicitly; the resolver never infers commutativity or
//! broadcasting.

use crate::error::DeclarationError;
use crate::table::RuleTable;

/// Declaration text for the WGSL expression operators.
pub const WGSL_OPERATORS: &str = r"
// Addition
type('+', [Number(T)], [T, T], T)
type('+', [Number(T), N], [Vector(T, N), T], Vector(T, N))
type('+', [Number(T), N], [T, Vector(T, N)], Vector(T, N))
type('+', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))
type('+', [Float(T), C, R], [Matrix(T, C, R), Matrix(T, C, R)], Matrix(T, C, R))

// Subtraction
type('-', [Number(T)], [T, T], T)
type('-', [Number(T), N], [Vector(T, N), T], Vector(T, N))
type('-', [Number(T), N], [T, Vector(T, N)], Vector(T, N))
type('-', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))
type('-', [Float(T), C, R], [Matrix(T, C, R), Matrix(T, C, R)], Matrix(T, C, R))

// Multiplication
type('*', [Float(T), C, R], [Matrix(T, C, R), Vector(T, C)], Vector(T, R))
type('*', [Float(T), C, R], [Vector(T, R), Matrix(T, C, R)], Vector(T, C))
type('*', [Number(T)], [T, T], T)
type('*', [Number(T), N], [Vector(T, N), T], Vector(T, N))
type('*', [Number(T), N], [T, Vector(T, N)], Vector(T, N))
type('*', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))
type('*', [Float(T), C, R], [Matrix(T, C, R), T], Matrix(T, C, R))
type('*', [Float(T), C, R], [T, Matrix(T, C, R)], Matrix(T, C, R))
type('*', [Float(T), C, R, K], [Matrix(T, C, R), Matrix(T, K, C)], Matrix(T, K, R))

// Division and remainder
type('/', [Number(T)], [T, T], T)
type('/', [Number(T), N], [Vector(T, N), T], Vector(T, N))
type('/', [Number(T), N], [T, Vector(T, N)], Vector(T, N))
type('/', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))
type('%', [Number(T)], [T, T], T)
type('%', [Number(T), N], [Vector(T, N), T], Vector(T, N))
type('%', [Number(T), N], [T, Vector(T, N)], Vector(T, N))
type('%', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))

// Negation
type('-', [Signed(T)], [T], T)
type('-', [Signed(T), N], [Vector(T, N)], Vector(T, N))

// Comparison
type('==', [Scalar(T)], [T, T], bool)
type('==', [Scalar(T), N], [Vector(T, N), Vector(T, N)], Vector(bool, N))
type('!=', [Scalar(T)], [T, T], bool)
type('!=', [Scalar(T), N], [Vector(T, N), Vector(T, N)], Vector(bool, N))
type('<', [Number(T)], [T, T], bool)
type('<', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(bool, N))
type('<=', [Number(T)], [T, T], bool)
type('<=', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(bool, N))
type('>', [Number(T)], [T, T], bool)
type('>', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(bool, N))
type('>=', [Number(T)], [T, T], bool)
type('>=', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(bool, N))

// Logical
type('!', [], [bool], bool)
type('!', [N], [Vector(bool, N)], Vector(bool, N))
type('&&', [], [bool, bool], bool)
type('||', [], [bool, bool], bool)

// Bitwise
type('&', [Integer(T)], [T, T], T)
type('&', [Integer(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))
type('&', [], [bool, bool], bool)
type('&', [N], [Vector(bool, N), Vector(bool, N)], Vector(bool, N))
type('|', [Integer(T)], [T, T], T)
type('|', [Integer(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))
type('|', [], [bool, bool], bool)
type('|', [N], [Vector(bool, N), Vector(bool, N)], Vector(bool, N))
type('^', [Integer(T)], [T, T], T)
type('^', [Integer(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))
type('~', [Integer(T)], [T], T)
type('~', [Integer(T), N], [Vector(T, N)], Vector(T, N))

// Shifts: the shift amount is always unsigned
type('<<', [Integer(T)], [T, u32], T)
type('<<', [Integer(T), N], [Vector(T, N), Vector(u32, N)], Vector(T, N))
type('>>', [Integer(T)], [T, u32], T)
type('>>', [Integer(T), N], [Vector(T, N), Vector(u32, N)], Vector(T, N))
";

impl RuleTable {
    /// The built-in WGSL operator table.
    pub fn wgsl_operators() -> Result<Self, DeclarationError> {
        let table = Self::from_source(WGSL_OPERATORS)?;
        tracing::debug!(rules = table.len(), "loaded WGSL operator catalog");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_is_valid() {
        let table = RuleTable::wgsl_operators().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(table.len(), 61);
        assert_eq!(
            table.operators(),
            vec![
                "!", "!=", "%", "&", "&&", "*", "+", "-", "/", "<", "<<", "<=", "==", ">",
                ">=", ">>", "^", "|", "||", "~",
            ]
        );
        assert_eq!(table.arities("-").collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn addition_rules_come_first_in_declared_order() {
        let table = RuleTable::wgsl_operators().unwrap_or_else(|e| panic!("{e}"));
        let rendered: Vec<String> = table.lookup("+", 2).iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "type('+', [Number(T)], [T, T], T)",
                "type('+', [Number(T), N], [Vector(T, N), T], Vector(T, N))",
                "type('+', [Number(T), N], [T, Vector(T, N)], Vector(T, N))",
                "type('+', [Number(T), N], [Vector(T, N), Vector(T, N)], Vector(T, N))",
                "type('+', [Float(T), C, R], [Matrix(T, C, R), Matrix(T, C, R)], Matrix(T, C, R))",
            ]
        );
    }
}
