//! Evaluation and equivalence checking for Boolean functions

use super::{Function, Term, UnboundVariableError, Variable};
use log::debug;
use std::collections::BTreeMap;

impl Term {
    /// Whether every literal of the term is satisfied by the assignment
    ///
    /// Variables missing from the assignment read as false; callers that
    /// need a completeness guarantee go through [`Function::evaluate`].
    pub(crate) fn satisfied_by(&self, assignment: &BTreeMap<Variable, bool>) -> bool {
        self.literals()
            .all(|lit| assignment.get(&lit.var).copied().unwrap_or(false) != lit.negated)
    }
}

impl Function {
    /// Evaluate the function under a complete variable assignment
    ///
    /// The function is true iff at least one term has all its literals
    /// satisfied. The assignment must cover every free variable;
    /// otherwise the first unbound variable is reported as an
    /// [`UnboundVariableError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::{Function, Variable};
    /// use std::collections::BTreeMap;
    ///
    /// # fn main() -> Result<(), quine_logic::Error> {
    /// let f = Function::parse_terms(["AB'"])?;
    /// let a = Variable::new('A').unwrap();
    /// let b = Variable::new('B').unwrap();
    ///
    /// let mut assignment = BTreeMap::new();
    /// assignment.insert(a, true);
    /// assignment.insert(b, false);
    /// assert!(f.evaluate(&assignment)?);
    ///
    /// assignment.insert(b, true);
    /// assert!(!f.evaluate(&assignment)?);
    ///
    /// // Incomplete assignments are rejected
    /// assignment.remove(&a);
    /// assert!(f.evaluate(&assignment).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(
        &self,
        assignment: &BTreeMap<Variable, bool>,
    ) -> Result<bool, UnboundVariableError> {
        for variable in self.free_variables() {
            if !assignment.contains_key(&variable) {
                return Err(UnboundVariableError { variable });
            }
        }
        Ok(self.eval_unchecked(assignment))
    }

    /// Evaluation against an assignment known to cover the free variables
    pub(crate) fn eval_unchecked(&self, assignment: &BTreeMap<Variable, bool>) -> bool {
        self.terms().iter().any(|term| term.satisfied_by(assignment))
    }

    /// Decide whether two functions compute the same truth value on every
    /// assignment of their combined variables
    ///
    /// This is an exhaustive check over all `2^n` assignments of the
    /// union of both free-variable sets, so it is exact regardless of how
    /// either function is written. It is the ground truth that
    /// [`minimize`](Function::minimize) is tested against.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Function;
    ///
    /// # fn main() -> Result<(), quine_logic::Error> {
    /// let f = Function::parse_terms(["AB'", "AB"])?;
    /// let g = Function::parse_terms(["A"])?;
    /// assert!(f.equivalent_to(&g));
    ///
    /// let h = Function::parse_terms(["AB"])?;
    /// assert!(!h.equivalent_to(&g));
    /// # Ok(())
    /// # }
    /// ```
    pub fn equivalent_to(&self, other: &Function) -> bool {
        let variables: Vec<Variable> = self
            .free_variables()
            .union(&other.free_variables())
            .copied()
            .collect();
        let rows = 1u32 << variables.len();
        debug!(
            "equivalence check over {} variables ({} assignments)",
            variables.len(),
            rows
        );
        (0..rows).all(|row| {
            let assignment = assignment_for(&variables, row);
            self.eval_unchecked(&assignment) == other.eval_unchecked(&assignment)
        })
    }
}

/// The assignment for one row of the truth table over `variables`
///
/// Rows count in binary with the first (lexicographically smallest)
/// variable as the most significant bit, matching the enumeration order
/// of [`TruthTable`](super::TruthTable).
pub(crate) fn assignment_for(variables: &[Variable], row: u32) -> BTreeMap<Variable, bool> {
    let width = variables.len();
    variables
        .iter()
        .enumerate()
        .map(|(i, &var)| (var, row >> (width - 1 - i) & 1 == 1))
        .collect()
}
