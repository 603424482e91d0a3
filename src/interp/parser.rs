//! Parsing support for the command language

use super::error::InterpError;
use super::Command;
use lalrpop_util::lexer::Token;
use lalrpop_util::ParseError;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod grammar {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/interp/command.rs"));
}

/// Parse one source line into a [`Command`]
///
/// `line_number` is 1-based and only used to report errors.
pub(crate) fn parse_line(line: &str, line_number: usize) -> Result<Command, InterpError> {
    grammar::CommandParser::new().parse(line).map_err(|err| {
        let (position, message) = describe(err);
        InterpError::Syntax {
            line: line_number,
            position,
            message,
        }
    })
}

/// Flatten a lalrpop error into a position and a one-line message
fn describe(err: ParseError<usize, Token<'_>, &str>) -> (Option<usize>, String) {
    match err {
        ParseError::InvalidToken { location } => (Some(location), "invalid token".to_string()),
        ParseError::UnrecognizedToken {
            token: (start, token, _),
            expected,
        } => (
            Some(start),
            format!("unexpected `{}`, expected {}", token, expected.join(" or ")),
        ),
        ParseError::ExtraToken {
            token: (start, token, _),
        } => (Some(start), format!("extra input `{}`", token)),
        // End-of-line and user errors keep their rendered message
        other => (None, other.to_string()),
    }
}
