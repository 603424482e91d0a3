//! # Quine-McCluskey Boolean Engine
//!
//! This crate is a small engine for Boolean functions written as sums of
//! literal terms (`AB' + C`). It parses compact term text, minimizes
//! sum-of-products expressions to an irreducible cover with the
//! Quine-McCluskey procedure, decides logical equivalence exactly, and
//! enumerates truth tables - either through the library API or through a
//! line-oriented command interpreter.
//!
//! ## Library usage
//!
//! ```
//! use quine_logic::Function;
//!
//! # fn main() -> Result<(), quine_logic::Error> {
//! let f = Function::parse_terms(["AB'", "AB"])?;
//!
//! // Minimization: AB' + AB collapses to A
//! let minimized = f.minimize();
//! assert_eq!(minimized.to_string(), "A");
//!
//! // Equivalence is checked semantically, not structurally
//! assert!(f.equivalent_to(&minimized));
//!
//! // Truth tables enumerate every assignment deterministically
//! let table = f.truth_table();
//! assert_eq!(table.num_rows(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Interpreter usage
//!
//! The interpreter executes the four command kinds of the source
//! language - assignment, `simplify`, `compare` and `table` - and holds
//! the named definitions between commands:
//!
//! ```
//! use quine_logic::Interpreter;
//!
//! # fn main() -> Result<(), quine_logic::Error> {
//! let script = "\
//! X = AB' + AB
//! Y = A
//! compare X Y
//! ";
//!
//! let mut out = Vec::new();
//! Interpreter::new().run_script(script, &mut out)?;
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with("X is equivalent to Y\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! Only sum-of-products input is supported: no parenthesized general
//! expressions, no multi-output functions, and nothing persists across
//! runs. Minimization and equivalence checking enumerate the Boolean
//! hypercube, which is exponential in the variable count; the engine
//! targets the small variable counts of hand-written exercises.

// Public modules
pub mod error;
pub mod function;
pub mod interp;

// Re-export high-level public API
pub use error::Error;
pub use function::{
    Function, Literal, Row, Rows, Term, TermParseError, TruthTable, UnboundVariableError, Variable,
};
pub use interp::{Command, ErrorPolicy, InterpError, Interpreter, InterpreterConfig};
