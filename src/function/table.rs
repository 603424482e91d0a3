//! Truth-table enumeration for Boolean functions

use super::eval::assignment_for;
use super::{Function, Variable};
use std::fmt;

impl Function {
    /// Enumerate the function's complete truth table
    ///
    /// Columns are the free variables in lexicographic order; rows count
    /// in binary from all-false to all-true with the first column as the
    /// most significant bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Function;
    ///
    /// # fn main() -> Result<(), quine_logic::Error> {
    /// let f = Function::parse_terms(["A'"])?;
    /// let table = f.truth_table();
    /// let rows: Vec<_> = table.rows().collect();
    /// assert_eq!(rows.len(), 2);
    /// assert!(rows[0].output()); // A = 0
    /// assert!(!rows[1].output()); // A = 1
    /// # Ok(())
    /// # }
    /// ```
    pub fn truth_table(&self) -> TruthTable {
        TruthTable {
            variables: self.free_variables().into_iter().collect(),
            function: self.clone(),
        }
    }
}

/// A complete truth table over a function's free variables
///
/// The table holds no iteration state of its own: [`rows`](TruthTable::rows)
/// can be called any number of times and always replays the same `2^n`
/// rows in the same order.
///
/// The `Display` form is the familiar header-plus-rows layout:
///
/// ```text
/// A | B | Out
/// 0 | 0 | 0
/// 0 | 1 | 0
/// 1 | 0 | 1
/// 1 | 1 | 1
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: Vec<Variable>,
    function: Function,
}

impl TruthTable {
    /// The column variables, in lexicographic order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Total number of rows (`2^n` for `n` variables)
    pub fn num_rows(&self) -> usize {
        1 << self.variables.len()
    }

    /// Iterate over the rows in enumeration order
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            next: 0,
            end: 1 << self.variables.len(),
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for variable in &self.variables {
            write!(f, "{} | ", variable)?;
        }
        write!(f, "Out")?;
        for row in self.rows() {
            write!(f, "\n{}", row)?;
        }
        Ok(())
    }
}

/// One truth-table row: an assignment and the function's output for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<bool>,
    output: bool,
}

impl Row {
    /// The assigned values, parallel to [`TruthTable::variables`]
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// The function's output under this assignment
    pub fn output(&self) -> bool {
        self.output
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in &self.values {
            write!(f, "{} | ", if value { '1' } else { '0' })?;
        }
        write!(f, "{}", if self.output { '1' } else { '0' })
    }
}

/// Row iterator returned by [`TruthTable::rows`]
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    table: &'a TruthTable,
    next: u32,
    end: u32,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next == self.end {
            return None;
        }
        let row = self.next;
        self.next += 1;

        let variables = &self.table.variables;
        let assignment = assignment_for(variables, row);
        let values = variables
            .iter()
            .map(|var| assignment.get(var).copied().unwrap_or(false))
            .collect();
        let output = self.table.function.eval_unchecked(&assignment);
        Some(Row { values, output })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
