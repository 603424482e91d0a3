//! Command interpretation over named Boolean functions
//!
//! The interpreter owns the store of named function definitions and
//! dispatches the four command kinds of the source language:
//!
//! - `X = AB' + C` - define (or redefine) a named function
//! - `simplify X` - print the minimal sum-of-products form
//! - `compare X Y` - decide logical equivalence
//! - `table X` - print the complete truth table
//!
//! Scripts are line-oriented; blank lines and `#` comments are skipped.
//! By default the first error ends the batch, matching the historical
//! behavior; [`ErrorPolicy::Skip`] reports the failing line and keeps
//! going instead.
//!
//! # Examples
//!
//! ```
//! use quine_logic::Interpreter;
//!
//! # fn main() -> Result<(), quine_logic::Error> {
//! let mut interp = Interpreter::new();
//! let mut out = Vec::new();
//! interp.run_script("X = AB' + AB\nsimplify X\n", &mut out)?;
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text, "X = AB' + AB\nSimplified X: A\n");
//! # Ok(())
//! # }
//! ```

// Submodules
pub mod error;
mod parser;

pub use error::InterpError;

use crate::error::Error;
use crate::function::Function;
use log::debug;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// A parsed command, one of the four kinds the engine executes
///
/// Produced by the script parser, or constructed directly when driving
/// the interpreter programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bind `name` to the sum of the given term texts
    Assign {
        /// Binding name
        name: String,
        /// Term texts in definition order, validated at execution time
        terms: Vec<String>,
    },
    /// Print the minimized form of a named function
    Simplify {
        /// Binding name
        name: String,
    },
    /// Decide whether two named functions are logically equivalent
    Compare {
        /// First binding name
        left: String,
        /// Second binding name
        right: String,
    },
    /// Print the truth table of a named function
    TruthTable {
        /// Binding name
        name: String,
    },
}

/// What to do with the rest of a script after a command fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first error (historical behavior, the default)
    #[default]
    Abort,
    /// Report the failing line and continue with the next command
    Skip,
}

/// Configuration for script execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Error handling policy for [`Interpreter::run_script`]
    pub error_policy: ErrorPolicy,
}

/// The command interpreter and its store of named functions
///
/// Bindings live in a namespace of their own, separate from the Boolean
/// variables inside terms; reassigning a name overwrites the previous
/// definition. There is no deletion.
#[derive(Debug, Default)]
pub struct Interpreter {
    bindings: BTreeMap<String, Function>,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Create an interpreter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with an explicit configuration
    pub fn with_config(config: InterpreterConfig) -> Self {
        Interpreter {
            bindings: BTreeMap::new(),
            config,
        }
    }

    /// Look up a named function
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.bindings.get(name)
    }

    fn lookup(&self, name: &str) -> Result<&Function, InterpError> {
        self.bindings
            .get(name)
            .ok_or_else(|| InterpError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Execute a single command and return its output text
    ///
    /// Assignment echoes the definition as written; the other commands
    /// format their result per the output contract. Multi-line output
    /// (truth tables) embeds `\n` separators without a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::{Command, Interpreter};
    ///
    /// let mut interp = Interpreter::new();
    /// let assign = Command::Assign {
    ///     name: "W".to_string(),
    ///     terms: vec!["A'".to_string()],
    /// };
    /// assert_eq!(interp.execute(&assign).unwrap(), "W = A'");
    ///
    /// let table = Command::TruthTable {
    ///     name: "W".to_string(),
    /// };
    /// assert_eq!(interp.execute(&table).unwrap(), "A | Out\n0 | 1\n1 | 0");
    /// ```
    pub fn execute(&mut self, command: &Command) -> Result<String, InterpError> {
        match command {
            Command::Assign { name, terms } => {
                let function = Function::parse_terms(terms)?;
                self.bindings.insert(name.clone(), function);
                Ok(format!("{} = {}", name, terms.join(" + ")))
            }
            Command::Simplify { name } => {
                let function = self.lookup(name)?;
                Ok(format!("Simplified {}: {}", name, function.minimize()))
            }
            Command::Compare { left, right } => {
                let f = self.lookup(left)?;
                let g = self.lookup(right)?;
                if f.equivalent_to(g) {
                    Ok(format!("{} is equivalent to {}", left, right))
                } else {
                    Ok(format!("{} is not equivalent to {}", left, right))
                }
            }
            Command::TruthTable { name } => {
                let function = self.lookup(name)?;
                Ok(function.truth_table().to_string())
            }
        }
    }

    /// Run a whole script, writing one output block per command to `out`
    ///
    /// Lines are processed strictly in order; each command completes
    /// (including its error report) before the next starts. A failing
    /// command writes an `Error: ...` line; under
    /// [`ErrorPolicy::Abort`] the run then stops with that error, under
    /// [`ErrorPolicy::Skip`] it continues and the first error is
    /// reported once the script ends.
    pub fn run_script<W: Write>(&mut self, source: &str, out: &mut W) -> Result<(), Error> {
        let mut first_error: Option<InterpError> = None;

        for (index, raw) in source.lines().enumerate() {
            let code = match raw.find('#') {
                Some(hash) => &raw[..hash],
                None => raw,
            };
            let code = code.trim();
            if code.is_empty() {
                continue;
            }
            debug!("line {}: {}", index + 1, code);

            let result = parser::parse_line(code, index + 1)
                .and_then(|command| self.execute(&command));
            match result {
                Ok(text) => writeln!(out, "{}", text)?,
                Err(err) => {
                    writeln!(out, "Error: {}", err)?;
                    match self.config.error_policy {
                        ErrorPolicy::Abort => return Err(err.into()),
                        ErrorPolicy::Skip => {
                            first_error.get_or_insert(err);
                        }
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Read a script from disk and run it
    pub fn run_script_file<P: AsRef<Path>, W: Write>(
        &mut self,
        path: P,
        out: &mut W,
    ) -> Result<(), Error> {
        let source = std::fs::read_to_string(path)?;
        self.run_script(&source, out)
    }
}
