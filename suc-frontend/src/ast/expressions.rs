//! Expression tree nodes
//!
//! Every node owns its children outright. A node is either a leaf holding a
//! single-character operand or a binary operator with exactly two children.

use super::ops::BinaryOp;
use serde::{Deserialize, Serialize};
use std::fmt;
use suc_common::SourceLocation;

/// Expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    /// Sethi-Ullman number; zero until the labeler has run
    pub label: u32,
    pub location: SourceLocation,
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    Leaf(char),
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn leaf(value: char, location: SourceLocation) -> Self {
        Self {
            kind: ExpressionKind::Leaf(value),
            label: 0,
            location,
        }
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression, location: SourceLocation) -> Self {
        Self {
            kind: ExpressionKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            label: 0,
            location,
        }
    }

    /// Wrap a parsed tree as `x = <expr>` for display.
    ///
    /// The `x` leaf is pinned to label 1. The result must not be handed to
    /// the code generators.
    pub fn display_root(expr: Expression) -> Self {
        let mut target = Expression::leaf('x', SourceLocation::dummy());
        target.label = 1;
        Expression::binary(BinaryOp::Assign, target, expr, SourceLocation::dummy())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ExpressionKind::Leaf(_))
    }

    /// Operand character for leaves, operator symbol for internal nodes
    pub fn symbol(&self) -> char {
        match &self.kind {
            ExpressionKind::Leaf(value) => *value,
            ExpressionKind::Binary { op, .. } => op.symbol(),
        }
    }

    pub fn left(&self) -> Option<&Expression> {
        match &self.kind {
            ExpressionKind::Binary { left, .. } => Some(left),
            ExpressionKind::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Expression> {
        match &self.kind {
            ExpressionKind::Binary { right, .. } => Some(right),
            ExpressionKind::Leaf(_) => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            ExpressionKind::Leaf(_) => 1,
            ExpressionKind::Binary { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn operator_count(&self) -> usize {
        match &self.kind {
            ExpressionKind::Leaf(_) => 0,
            ExpressionKind::Binary { left, right, .. } => {
                1 + left.operator_count() + right.operator_count()
            }
        }
    }
}

/// Fully parenthesized infix form, e.g. `(a+(b*c))`
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpressionKind::Leaf(value) => write!(f, "{value}"),
            ExpressionKind::Binary { op, left, right } => write!(f, "({left}{op}{right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(c: char) -> Expression {
        Expression::leaf(c, SourceLocation::dummy())
    }

    #[test]
    fn test_display_parenthesizes_every_operator() {
        let inner = Expression::binary(BinaryOp::Mul, leaf('b'), leaf('c'), SourceLocation::dummy());
        let tree = Expression::binary(BinaryOp::Add, leaf('a'), inner, SourceLocation::dummy());
        assert_eq!(tree.to_string(), "(a+(b*c))");
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.operator_count(), 2);
    }

    #[test]
    fn test_display_root_shape() {
        let root = Expression::display_root(leaf('a'));
        assert_eq!(root.symbol(), '=');
        let target = root.left().unwrap();
        assert_eq!(target.symbol(), 'x');
        assert_eq!(target.label, 1);
        assert_eq!(root.right().unwrap().symbol(), 'a');
    }

    #[test]
    fn test_leaf_has_no_children() {
        let a = leaf('a');
        assert!(a.is_leaf());
        assert!(a.left().is_none());
        assert!(a.right().is_none());
    }
}
