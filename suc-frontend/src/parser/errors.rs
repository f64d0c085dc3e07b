//! Parse error types for the expression parser
//!
//! Every variant surfaces as a single `CompilerError::MalformedExpression`;
//! the variant only decides the message.

use crate::ast::BinaryOp;
use suc_common::{CompilerError, SourceLocation};

/// Parse error types specific to the parser
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyExpression {
        location: SourceLocation,
    },
    MissingOperand {
        op: BinaryOp,
        location: SourceLocation,
    },
    UnmatchedCloseParen {
        location: SourceLocation,
    },
    UnclosedParen {
        location: SourceLocation,
    },
    DanglingOperand {
        operand: String,
        location: SourceLocation,
    },
    TooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyExpression { location } => {
                CompilerError::malformed("empty expression", location)
            }
            ParseError::MissingOperand { op, location } => {
                CompilerError::malformed(format!("operator '{op}' is missing an operand"), location)
            }
            ParseError::UnmatchedCloseParen { location } => {
                CompilerError::malformed("unmatched ')'", location)
            }
            ParseError::UnclosedParen { location } => {
                CompilerError::malformed("unclosed '('", location)
            }
            ParseError::DanglingOperand { operand, location } => CompilerError::malformed(
                format!("operand '{operand}' is not joined to the rest of the expression by an operator"),
                location,
            ),
            ParseError::TooDeep { limit, location } => CompilerError::malformed(
                format!("expression is nested more than {limit} levels deep"),
                location,
            ),
        }
    }
}
