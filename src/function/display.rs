//! Display formatting for variables, literals, terms and functions
//!
//! The textual form is the compact sum-of-products dialect the engine
//! parses: literals concatenate with no separator, `'` marks negation,
//! terms join with `" + "`, and the constants render as `"1"` and `"0"`.

use super::{Function, Literal, Term, Variable};
use std::fmt;

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}'", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

/// Renders the concatenated literals, or `"1"` for the empty term
///
/// # Examples
///
/// ```
/// use quine_logic::Term;
///
/// let term: Term = "AB'C".parse().unwrap();
/// assert_eq!(term.to_string(), "AB'C");
/// assert_eq!(Term::default().to_string(), "1");
/// ```
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        for literal in self.literals() {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// Renders the `" + "`-joined terms, or `"0"` for the empty function
///
/// # Examples
///
/// ```
/// use quine_logic::Function;
///
/// # fn main() -> Result<(), quine_logic::Error> {
/// let f = Function::parse_terms(["AB", "C'D"])?;
/// assert_eq!(f.to_string(), "AB + C'D");
/// assert_eq!(Function::constant(false).to_string(), "0");
/// # Ok(())
/// # }
/// ```
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms().is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms().iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
