//! Error types for term parsing and function evaluation

use super::Variable;
use std::fmt;

/// Errors raised while parsing a product term from literal text
///
/// Terms follow the grammar `([A-Z]'?)*`. Anything outside it, and a
/// variable constrained to both polarities at once, is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermParseError {
    /// The text contains a character outside the literal grammar, or a
    /// `'` that does not immediately follow a letter
    InvalidTermSyntax {
        /// The full term text that failed to parse
        term: String,
        /// Byte offset of the offending character
        position: usize,
    },
    /// A variable appears both plain and negated within one term
    ConflictingPolarity {
        /// The full term text that failed to parse
        term: String,
        /// The doubly-constrained variable
        variable: Variable,
    },
}

impl fmt::Display for TermParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermParseError::InvalidTermSyntax { term, .. } => {
                write!(
                    f,
                    "'{}' is invalid. Use only uppercase letters and optional '.",
                    term
                )
            }
            TermParseError::ConflictingPolarity { term, variable } => {
                write!(
                    f,
                    "'{}' is invalid. Variable {} appears in both polarities.",
                    term, variable
                )
            }
        }
    }
}

impl std::error::Error for TermParseError {}

/// A function was evaluated under an assignment missing one of its
/// variables
///
/// Returned by [`Function::evaluate`](super::Function::evaluate) when the
/// assignment does not cover the function's free-variable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnboundVariableError {
    /// The first free variable with no assigned value
    pub variable: Variable,
}

impl fmt::Display for UnboundVariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "variable {} is not bound by the assignment", self.variable)
    }
}

impl std::error::Error for UnboundVariableError {}
