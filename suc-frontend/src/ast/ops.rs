//! Operator definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add, Sub, Mul, Div,

    /// Only appears at the root of the display tree, never out of the parser
    Assign,
}

impl BinaryOp {
    /// Shunting-yard precedence; higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Assign => 0,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Assign => '=',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        assert_eq!(BinaryOp::Add.precedence(), BinaryOp::Sub.precedence());
        assert_eq!(BinaryOp::Mul.precedence(), BinaryOp::Div.precedence());
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert_eq!(BinaryOp::Assign.precedence(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(BinaryOp::Div.to_string(), "/");
        assert_eq!(BinaryOp::Assign.to_string(), "=");
    }
}
