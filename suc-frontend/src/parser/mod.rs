//! Shunting-yard expression parser
//!
//! Builds the expression tree in a single left-to-right pass over the tokens
//! using an operand stack of subtrees and an operator stack that also holds
//! `(` markers. All binary operators are left-associative.
//!
//! Every later phase walks the tree recursively, so the parser refuses to
//! build a tree deeper than [`MAX_EXPRESSION_DEPTH`] levels. A chain such as
//! `a-a-a-...` grows one level per operator and hits the limit long before
//! it could exhaust the stack.

pub mod errors;

use crate::ast::{BinaryOp, Expression};
use crate::lexer::{Token, TokenType};
use log::debug;
use std::collections::VecDeque;
use suc_common::{CompilerError, SourceLocation};

pub use errors::ParseError;

/// Deepest tree the parser will build; a leaf is one level
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// Subtree on the operand stack with its depth
struct Operand {
    tree: Expression,
    depth: usize,
}

/// Entry on the operator stack
#[derive(Debug, Clone)]
enum StackEntry {
    Open(SourceLocation),
    Operator { op: BinaryOp, location: SourceLocation },
}

impl StackEntry {
    /// Whether this entry must be reduced before `incoming` is pushed
    fn binds_at_least(&self, incoming: BinaryOp) -> bool {
        match self {
            StackEntry::Open(_) => false,
            StackEntry::Operator { op, .. } => op.precedence() >= incoming.precedence(),
        }
    }
}

/// Expression parser
pub struct Parser {
    tokens: VecDeque<Token>,
}

impl Parser {
    /// Create a new parser
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }

    fn advance(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Parse the token stream into exactly one tree
    pub fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        let mut operands: Vec<Operand> = Vec::new();
        let mut operators: Vec<StackEntry> = Vec::new();
        let mut end = SourceLocation::at_column(1);

        while let Some(token) = self.advance() {
            match token.token_type {
                TokenType::Operand(value) => {
                    operands.push(Operand {
                        tree: Expression::leaf(value, token.location),
                        depth: 1,
                    });
                }
                TokenType::LeftParen => {
                    operators.push(StackEntry::Open(token.location));
                }
                TokenType::RightParen => loop {
                    match operators.pop() {
                        Some(StackEntry::Open(_)) => break,
                        Some(StackEntry::Operator { op, location }) => {
                            Self::reduce(&mut operands, op, location)?;
                        }
                        None => {
                            return Err(ParseError::UnmatchedCloseParen {
                                location: token.location,
                            }
                            .into());
                        }
                    }
                },
                TokenType::EndOfInput => {
                    end = token.location;
                    break;
                }
                other => {
                    let Some(op) = other.binary_op() else {
                        return Err(CompilerError::from(format!("token '{other}' is not an operator")));
                    };
                    while operators.last().is_some_and(|entry| entry.binds_at_least(op)) {
                        if let Some(StackEntry::Operator { op: top, location }) = operators.pop() {
                            Self::reduce(&mut operands, top, location)?;
                        }
                    }
                    operators.push(StackEntry::Operator {
                        op,
                        location: token.location,
                    });
                }
            }
        }

        while let Some(entry) = operators.pop() {
            match entry {
                StackEntry::Open(location) => {
                    return Err(ParseError::UnclosedParen { location }.into());
                }
                StackEntry::Operator { op, location } => {
                    Self::reduce(&mut operands, op, location)?;
                }
            }
        }

        match operands.len() {
            0 => Err(ParseError::EmptyExpression { location: end }.into()),
            1 => operands
                .pop()
                .map(|operand| operand.tree)
                .ok_or_else(|| CompilerError::from("operand stack emptied unexpectedly".to_string())),
            _ => {
                let stray = &operands[1].tree;
                Err(ParseError::DanglingOperand {
                    operand: stray.to_string(),
                    location: stray.location.clone(),
                }
                .into())
            }
        }
    }

    /// Pop two operands and push them back joined by `op`
    fn reduce(operands: &mut Vec<Operand>, op: BinaryOp, location: SourceLocation) -> Result<(), ParseError> {
        let right = operands.pop();
        let left = operands.pop();
        match (left, right) {
            (Some(left), Some(right)) => {
                let depth = 1 + left.depth.max(right.depth);
                if depth > MAX_EXPRESSION_DEPTH {
                    return Err(ParseError::TooDeep {
                        limit: MAX_EXPRESSION_DEPTH,
                        location,
                    });
                }
                debug!("reduce '{op}' at {location}, depth {depth}");
                operands.push(Operand {
                    tree: Expression::binary(op, left.tree, right.tree, location),
                    depth,
                });
                Ok(())
            }
            _ => Err(ParseError::MissingOperand { op, location }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, ExpressionKind};
    use pretty_assertions::assert_eq;

    fn root_op(tree: &Expression) -> BinaryOp {
        match &tree.kind {
            ExpressionKind::Binary { op, .. } => *op,
            ExpressionKind::Leaf(c) => panic!("Expected operator node, found leaf {c}"),
        }
    }

    fn message(input: &str) -> String {
        match parse(input).unwrap_err() {
            CompilerError::MalformedExpression { message, .. } => message,
            other => panic!("Expected malformed expression for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_single_operand() {
        let tree = parse("a").unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.symbol(), 'a');
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tree = parse("a+b*c").unwrap();
        assert_eq!(root_op(&tree), BinaryOp::Add);
        assert_eq!(root_op(tree.right().unwrap()), BinaryOp::Mul);
        assert_eq!(tree.to_string(), "(a+(b*c))");
    }

    #[test]
    fn test_left_associativity() {
        let tree = parse("a-b-c").unwrap();
        assert_eq!(root_op(&tree), BinaryOp::Sub);
        assert_eq!(root_op(tree.left().unwrap()), BinaryOp::Sub);
        assert_eq!(tree.to_string(), "((a-b)-c)");

        assert_eq!(parse("a/b/c").unwrap().to_string(), "((a/b)/c)");
        assert_eq!(parse("a*b/c").unwrap().to_string(), "((a*b)/c)");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let tree = parse("(a+b)*c").unwrap();
        assert_eq!(root_op(&tree), BinaryOp::Mul);
        assert_eq!(root_op(tree.left().unwrap()), BinaryOp::Add);
    }

    #[test]
    fn test_redundant_parentheses() {
        assert_eq!(parse("((a))").unwrap().to_string(), "a");
        assert_eq!(parse("(a*(b-(c/d)))").unwrap().to_string(), "(a*(b-(c/d)))");
    }

    #[test]
    fn test_mixed_expression() {
        assert_eq!(parse("a+b*c-d").unwrap().to_string(), "((a+(b*c))-d)");
        assert_eq!(parse("a*b+c*d").unwrap().to_string(), "((a*b)+(c*d))");
        assert_eq!(parse("1+2*3").unwrap().to_string(), "(1+(2*3))");
    }

    #[test]
    fn test_node_counts_match_input() {
        for input in ["a", "a+b", "a+b*c-d", "(a+b)*(c-d)/e", "((x))*y", "a-b-c-d-e"] {
            let tree = parse(input).unwrap();
            let operands = input.chars().filter(|c| c.is_ascii_alphanumeric()).count();
            let operators = input.chars().filter(|c| "+-*/".contains(*c)).count();
            assert_eq!(tree.leaf_count(), operands, "leaves of {input}");
            assert_eq!(tree.operator_count(), operators, "operators of {input}");
        }
    }

    #[test]
    fn test_operator_location_is_kept() {
        let tree = parse("a+b").unwrap();
        assert_eq!(tree.location, SourceLocation::at_column(2));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(message(""), "empty expression");
        assert_eq!(message("()"), "empty expression");
    }

    #[test]
    fn test_trailing_and_leading_operator() {
        assert_eq!(message("a+"), "operator '+' is missing an operand");
        assert_eq!(message("*a"), "operator '*' is missing an operand");
        assert_eq!(message("-"), "operator '-' is missing an operand");
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(message("(a+b"), "unclosed '('");
        assert_eq!(message("a+b)"), "unmatched ')'");
        assert_eq!(message(")"), "unmatched ')'");
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(message("a$b"), "unexpected character '$'");
        assert_eq!(message("a+b "), "whitespace is not allowed in an expression");
        assert_eq!(message("a=b"), "unexpected character '='");
    }

    /// `a-a-...-a` with `operators` subtractions
    fn chain(operators: usize) -> String {
        format!("a{}", "-a".repeat(operators))
    }

    #[test]
    fn test_deepest_allowed_chain() {
        let tree = parse(&chain(MAX_EXPRESSION_DEPTH - 1)).unwrap();
        assert_eq!(tree.operator_count(), MAX_EXPRESSION_DEPTH - 1);
        assert_eq!(
            message(&chain(MAX_EXPRESSION_DEPTH)),
            format!("expression is nested more than {MAX_EXPRESSION_DEPTH} levels deep")
        );
    }

    #[test]
    fn test_long_chain_is_rejected_without_overflow() {
        let err = parse(&chain(200_000)).unwrap_err();
        assert!(err.is_malformed_expression());

        let nested = format!("{}a{}", "a-(".repeat(200_000), ")".repeat(200_000));
        assert!(parse(&nested).unwrap_err().is_malformed_expression());
    }

    #[test]
    fn test_deep_parentheses_alone_do_not_count() {
        let input = format!("{}a{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(parse(&input).unwrap().to_string(), "a");
    }

    #[test]
    fn test_adjacent_operands_are_rejected() {
        let err = parse("ab").unwrap_err();
        assert_eq!(
            err,
            CompilerError::malformed(
                "operand 'b' is not joined to the rest of the expression by an operator",
                SourceLocation::at_column(2)
            )
        );
        assert!(parse("a(b+c)").is_err());
    }
}
