//! Crate-level error type
//!
//! Each layer of the engine has its own error enum with
//! programmatically distinguishable variants; this module provides the
//! aggregate [`Error`] that `?` converges to at the API surface.

use crate::function::{TermParseError, UnboundVariableError};
use crate::interp::InterpError;
use std::fmt;
use std::io;

/// The main error type for the Boolean engine
#[derive(Debug)]
pub enum Error {
    /// A term string violated the literal grammar
    Term(TermParseError),
    /// A function was evaluated under an incomplete assignment
    Eval(UnboundVariableError),
    /// A command failed to parse or execute
    Interp(InterpError),
    /// IO error wrapper for script reading and output writing
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Term(err) => write!(f, "{}", err),
            Error::Eval(err) => write!(f, "{}", err),
            Error::Interp(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Term(err) => Some(err),
            Error::Eval(err) => Some(err),
            Error::Interp(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<TermParseError> for Error {
    fn from(err: TermParseError) -> Self {
        Error::Term(err)
    }
}

impl From<UnboundVariableError> for Error {
    fn from(err: UnboundVariableError) -> Self {
        Error::Eval(err)
    }
}

impl From<InterpError> for Error {
    fn from(err: InterpError) -> Self {
        Error::Interp(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
