//! Abstract Syntax Tree definitions for arithmetic expressions

pub mod expressions;
pub mod ops;

pub use expressions::{Expression, ExpressionKind};
pub use ops::BinaryOp;
