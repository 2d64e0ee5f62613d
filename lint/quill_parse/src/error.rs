//! Parse error types.
//!
//! Every error is recoverable: the parser records it and keeps going, so a
//! stylesheet with a stray brace still gets linted.

use std::fmt;

use quill_ir::Span;

/// A structural problem found while parsing.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// A `{` whose block ran to end of input. The span covers the brace.
    UnclosedBlock { span: Span },
    /// A `}` with no open block. It is skipped.
    UnexpectedCloseBrace { span: Span },
    /// A statement that is neither a declaration nor a rule. It is skipped.
    MissingColon { span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnclosedBlock { span }
            | ParseError::UnexpectedCloseBrace { span }
            | ParseError::MissingColon { span } => *span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnclosedBlock { .. } => f.write_str("Unclosed block"),
            ParseError::UnexpectedCloseBrace { .. } => f.write_str("Unexpected \"}\""),
            ParseError::MissingColon { .. } => f.write_str("Unknown word, expected \":\""),
        }
    }
}

impl std::error::Error for ParseError {}
