//! Error types for command interpretation

use crate::function::TermParseError;
use std::fmt;

/// Errors raised while parsing or executing a command
///
/// Any of these ends the batch under the default
/// [`ErrorPolicy::Abort`](super::ErrorPolicy::Abort) policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    /// A command referenced a name that was never assigned
    UndefinedVariable {
        /// The unknown binding name
        name: String,
    },
    /// An assignment contained an invalid term
    InvalidTerm(TermParseError),
    /// A source line did not match the command grammar
    Syntax {
        /// 1-based line number in the script
        line: usize,
        /// Byte offset within the line, when the parser reports one
        position: Option<usize>,
        /// Parser diagnostic
        message: String,
    },
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::UndefinedVariable { name } => {
                write!(f, "variable '{}' not defined.", name)
            }
            InterpError::InvalidTerm(err) => write!(f, "{}", err),
            InterpError::Syntax {
                line,
                position,
                message,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "syntax error on line {}, column {}: {}",
                        line,
                        pos + 1,
                        message
                    )
                } else {
                    write!(f, "syntax error on line {}: {}", line, message)
                }
            }
        }
    }
}

impl std::error::Error for InterpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InterpError::InvalidTerm(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TermParseError> for InterpError {
    fn from(err: TermParseError) -> Self {
        InterpError::InvalidTerm(err)
    }
}
