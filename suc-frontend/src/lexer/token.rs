//! Token definitions for the expression lexer

use crate::ast::BinaryOp;
use std::fmt;
use suc_common::SourceLocation;

/// Expression token types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Single-character operand: a letter or a digit
    Operand(char),

    // Operators
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /

    // Delimiters
    LeftParen,      // (
    RightParen,     // )

    EndOfInput,
}

impl TokenType {
    /// The arithmetic operator this token stands for, if any
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            TokenType::Plus => Some(BinaryOp::Add),
            TokenType::Minus => Some(BinaryOp::Sub),
            TokenType::Star => Some(BinaryOp::Mul),
            TokenType::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Operand(c) => write!(f, "{c}"),
            TokenType::Plus => write!(f, "+"),
            TokenType::Minus => write!(f, "-"),
            TokenType::Star => write!(f, "*"),
            TokenType::Slash => write!(f, "/"),
            TokenType::LeftParen => write!(f, "("),
            TokenType::RightParen => write!(f, ")"),
            TokenType::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token with its position in the expression
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(token_type: TokenType, location: SourceLocation) -> Self {
        Self { token_type, location }
    }
}
