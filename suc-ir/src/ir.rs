//! Three-address code
//!
//! Every instruction computes one binary operation on two sources into a
//! fresh temporary: `t1 = b * c`.

use serde::{Deserialize, Serialize};
use std::fmt;
use suc_frontend::BinaryOp;

/// Temporary number; temporaries print as `t<id>`
pub type TempId = u32;

/// Source or result of a three-address instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// A named operand straight from the source expression
    Operand(char),
    Temp(TempId),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Operand(name) => write!(f, "{name}"),
            Value::Temp(id) => write!(f, "t{id}"),
        }
    }
}

/// `result = lhs op rhs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub result: TempId,
    pub op: BinaryOp,
    pub lhs: Value,
    pub rhs: Value,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {} {}", Value::Temp(self.result), self.lhs, self.op, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_display() {
        let inst = Instruction {
            result: 2,
            op: BinaryOp::Add,
            lhs: Value::Operand('a'),
            rhs: Value::Temp(1),
        };
        assert_eq!(inst.to_string(), "t2 = a + t1");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Operand('7').to_string(), "7");
        assert_eq!(Value::Temp(12).to_string(), "t12");
    }
}
