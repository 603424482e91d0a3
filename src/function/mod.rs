//! Boolean functions as sums of literal terms
//!
//! This module provides the core data model for the engine: single-letter
//! [`Variable`]s, [`Literal`]s, product [`Term`]s and sum-of-products
//! [`Function`]s, together with evaluation, equivalence checking,
//! Quine-McCluskey minimization and truth-table enumeration.
//!
//! # Main Types
//!
//! - [`Term`] - a conjunction (AND) of literals over distinct variables,
//!   parsed from compact text such as `"AB'C"`. The empty term is the
//!   constant true.
//! - [`Function`] - an ordered disjunction (OR) of terms. The empty
//!   function is the constant false.
//! - [`TruthTable`] - deterministic enumeration of all assignments of a
//!   function's variables.
//!
//! # Quick Start
//!
//! ```
//! use quine_logic::Function;
//!
//! # fn main() -> Result<(), quine_logic::Error> {
//! // AB' + AB collapses to A
//! let f = Function::parse_terms(["AB'", "AB"])?;
//! let minimized = f.minimize();
//! assert_eq!(minimized.to_string(), "A");
//!
//! // Minimization preserves semantics
//! assert!(f.equivalent_to(&minimized));
//! # Ok(())
//! # }
//! ```

// Submodules
mod display;
pub mod error;
mod eval;
mod minimize;
mod table;

pub use error::{TermParseError, UnboundVariableError};
pub use table::{Row, Rows, TruthTable};

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// A Boolean variable, identified by a single uppercase ASCII letter
///
/// Variables are interned by identity: two `Variable` values naming the
/// same letter are equal and interchangeable.
///
/// # Examples
///
/// ```
/// use quine_logic::Variable;
///
/// let a = Variable::new('A').unwrap();
/// assert_eq!(a.as_char(), 'A');
/// assert!(Variable::new('a').is_none());
/// assert!(Variable::new('1').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(char);

impl Variable {
    /// Create a variable from an uppercase ASCII letter
    ///
    /// Returns `None` for any other character.
    pub fn new(ch: char) -> Option<Self> {
        ch.is_ascii_uppercase().then_some(Variable(ch))
    }

    /// The letter naming this variable
    pub fn as_char(&self) -> char {
        self.0
    }
}

/// A variable or its negation
///
/// Two literals over the same variable with opposite `negated` flags are
/// complementary: exactly one of them is satisfied by any assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The variable this literal constrains
    pub var: Variable,
    /// Whether the variable appears negated (`A'` rather than `A`)
    pub negated: bool,
}

/// A product term: the AND of literals over distinct variables
///
/// A term constrains each of its variables to a single polarity, so it
/// denotes a sub-cube of the Boolean hypercube. The empty term places no
/// constraint at all and is the constant true disjunct.
///
/// Terms order lexicographically by `(variable, polarity)` with the
/// positive literal before the negated one, which makes minimized output
/// byte-stable.
///
/// # Examples
///
/// ```
/// use quine_logic::Term;
///
/// let term: Term = "AB'".parse().unwrap();
/// assert_eq!(term.len(), 2);
/// assert_eq!(term.to_string(), "AB'");
///
/// // Repeating a variable with one polarity is idempotent
/// assert_eq!("AA".parse::<Term>().unwrap(), "A".parse().unwrap());
///
/// // ...but both polarities at once are rejected
/// assert!("AA'".parse::<Term>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Term {
    /// Variable to negation flag; at most one entry per variable
    literals: BTreeMap<Variable, bool>,
}

impl Term {
    /// Parse a term from compact literal text
    ///
    /// The grammar is `([A-Z]'?)*`: zero or more uppercase letters, each
    /// optionally followed by a single `'` negation marker. The empty
    /// string parses to the empty (constant true) term.
    ///
    /// Any other character, a `'` that does not immediately follow a
    /// letter, or a variable repeated with conflicting polarity is a
    /// [`TermParseError`].
    pub fn parse(text: &str) -> Result<Self, TermParseError> {
        let mut occurrences: Vec<(Variable, bool)> = Vec::new();
        let mut after_letter = false;
        for (position, ch) in text.char_indices() {
            if let Some(var) = Variable::new(ch) {
                occurrences.push((var, false));
                after_letter = true;
            } else if ch == '\'' && after_letter {
                if let Some(last) = occurrences.last_mut() {
                    last.1 = true;
                }
                after_letter = false;
            } else {
                return Err(TermParseError::InvalidTermSyntax {
                    term: text.to_string(),
                    position,
                });
            }
        }

        let mut literals = BTreeMap::new();
        for (var, negated) in occurrences {
            if literals.insert(var, negated) == Some(!negated) {
                return Err(TermParseError::ConflictingPolarity {
                    term: text.to_string(),
                    variable: var,
                });
            }
        }
        Ok(Term { literals })
    }

    /// Build a term from individual literals
    ///
    /// Repeated literals collapse; a variable appearing with both
    /// polarities is a [`TermParseError::ConflictingPolarity`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::{Literal, Term, Variable};
    ///
    /// let a = Variable::new('A').unwrap();
    /// let b = Variable::new('B').unwrap();
    /// let term = Term::from_literals([
    ///     Literal { var: a, negated: false },
    ///     Literal { var: b, negated: true },
    /// ])
    /// .unwrap();
    /// assert_eq!(term.to_string(), "AB'");
    /// ```
    pub fn from_literals<I>(literals: I) -> Result<Self, TermParseError>
    where
        I: IntoIterator<Item = Literal>,
    {
        let mut map = BTreeMap::new();
        for lit in literals {
            if map.get(&lit.var) == Some(&!lit.negated) {
                let term = Term { literals: map };
                return Err(TermParseError::ConflictingPolarity {
                    term: term.to_string(),
                    variable: lit.var,
                });
            }
            map.insert(lit.var, lit.negated);
        }
        Ok(Term { literals: map })
    }

    /// Internal constructor for literal maps known to be conflict-free
    pub(crate) fn from_map(literals: BTreeMap<Variable, bool>) -> Self {
        Term { literals }
    }

    /// Number of literals in the term
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the term has no literals (the constant true disjunct)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The polarity of `var` in this term
    ///
    /// `Some(false)` for a positive literal, `Some(true)` for a negated
    /// one, `None` when the term does not mention the variable.
    pub fn polarity(&self, var: Variable) -> Option<bool> {
        self.literals.get(&var).copied()
    }

    /// Iterate over the literals in variable order
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals
            .iter()
            .map(|(&var, &negated)| Literal { var, negated })
    }

    /// The set of variables the term mentions
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.literals.keys().copied()
    }
}

impl FromStr for Term {
    type Err = TermParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::parse(s)
    }
}

/// A Boolean function: the OR of an ordered sequence of product terms
///
/// The term order is the order of definition; duplicates are permitted on
/// input and eliminated by [`minimize`](Function::minimize). The empty
/// function is the constant false.
///
/// Derived equality is *structural* (same terms in the same order). Two
/// functions computing the same truth table may compare unequal; use
/// [`equivalent_to`](Function::equivalent_to) for semantic comparison.
///
/// # Examples
///
/// ```
/// use quine_logic::Function;
///
/// # fn main() -> Result<(), quine_logic::Error> {
/// let f = Function::parse_terms(["AB", "C"])?;
/// assert_eq!(f.to_string(), "AB + C");
/// assert_eq!(f.free_variables().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    terms: Vec<Term>,
}

impl Function {
    /// Build a function from a sequence of terms, preserving order
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        Function {
            terms: terms.into_iter().collect(),
        }
    }

    /// The constant function: true (a single empty term) or false (no
    /// terms at all)
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Function;
    ///
    /// assert_eq!(Function::constant(true).to_string(), "1");
    /// assert_eq!(Function::constant(false).to_string(), "0");
    /// ```
    pub fn constant(value: bool) -> Self {
        if value {
            Function {
                terms: vec![Term::default()],
            }
        } else {
            Function { terms: Vec::new() }
        }
    }

    /// Parse a function from term texts, preserving order
    ///
    /// Applies [`Term::parse`] to each element; the first error wins.
    pub fn parse_terms<I, S>(texts: I) -> Result<Self, TermParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = texts
            .into_iter()
            .map(|text| Term::parse(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Function { terms })
    }

    /// The terms of the function, in definition order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The union of variables across all terms
    pub fn free_variables(&self) -> BTreeSet<Variable> {
        self.terms
            .iter()
            .flat_map(|term| term.variables())
            .collect()
    }
}

#[cfg(test)]
mod tests;
