//! Sethi-Ullman Compiler - Frontend
//!
//! This crate turns an infix arithmetic expression into an expression tree:
//! - Lexer: classifies each character of the input
//! - Parser: shunting-yard reduction into a binary tree
//! - AST: the owned expression tree shared with the later phases

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, Expression, ExpressionKind};
pub use lexer::{Lexer, Token, TokenType};
pub use parser::{ParseError, Parser, MAX_EXPRESSION_DEPTH};

use suc_common::{CompilerError, SourceTracker};

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Parse an expression typed directly by the user
    pub fn parse_source(source: &str) -> Result<Expression, CompilerError> {
        let tokens = Lexer::new(source).tokenize()?;
        Parser::new(tokens).parse_expression()
    }

    /// Parse an expression found on `line` of `filename`
    pub fn parse_source_at(source: &str, filename: &str, line: u32) -> Result<Expression, CompilerError> {
        let tracker = SourceTracker::starting_at(filename, line);
        let tokens = Lexer::with_tracker(source, tracker).tokenize()?;
        Parser::new(tokens).parse_expression()
    }
}

/// Parse an infix expression into a fresh, unlabeled tree
pub fn parse(expression: &str) -> Result<Expression, CompilerError> {
    Frontend::parse_source(expression)
}
