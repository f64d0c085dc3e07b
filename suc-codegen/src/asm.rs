//! Two-register pseudo-assembly
//!
//! This is a display format, not a real ISA. `ADD R2, R1` combines both
//! registers and the generator then copies R2 back into R1.

use serde::{Deserialize, Serialize};
use std::fmt;
use suc_frontend::BinaryOp;

/// The only two registers the scheme ever touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reg {
    /// Holds the value of the subtree just evaluated
    R1,
    /// Holds a saved left operand
    R2,
}

/// Register every subtree's value is left in
pub const RESULT_REGISTER: Reg = Reg::R1;

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reg::R1 => write!(f, "R1"),
            Reg::R2 => write!(f, "R2"),
        }
    }
}

/// Source operand of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Reg(Reg),
    /// Operand name from the source expression
    Name(char),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(reg) => write!(f, "{reg}"),
            Operand::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Pseudo-assembly instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsmInst {
    Mov(Reg, Operand),            // rd = src
    Add(Reg, Reg),                // rd, rs
    Sub(Reg, Reg),                // rd, rs
    Mul(Reg, Reg),                // rd, rs
    Div(Reg, Reg),                // rd, rs
}

impl AsmInst {
    /// Arithmetic instruction for `op`; `None` for operators with no mnemonic
    pub fn arithmetic(op: BinaryOp, rd: Reg, rs: Reg) -> Option<Self> {
        match op {
            BinaryOp::Add => Some(AsmInst::Add(rd, rs)),
            BinaryOp::Sub => Some(AsmInst::Sub(rd, rs)),
            BinaryOp::Mul => Some(AsmInst::Mul(rd, rs)),
            BinaryOp::Div => Some(AsmInst::Div(rd, rs)),
            BinaryOp::Assign => None,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            AsmInst::Mov(..) => "MOV",
            AsmInst::Add(..) => "ADD",
            AsmInst::Sub(..) => "SUB",
            AsmInst::Mul(..) => "MUL",
            AsmInst::Div(..) => "DIV",
        }
    }
}

impl fmt::Display for AsmInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmInst::Mov(rd, src) => write!(f, "{} {}, {}", self.mnemonic(), rd, src),
            AsmInst::Add(rd, rs)
            | AsmInst::Sub(rd, rs)
            | AsmInst::Mul(rd, rs)
            | AsmInst::Div(rd, rs) => write!(f, "{} {}, {}", self.mnemonic(), rd, rs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_display() {
        assert_eq!(format!("{}", Reg::R1), "R1");
        assert_eq!(format!("{}", Reg::R2), "R2");
        assert_eq!(RESULT_REGISTER, Reg::R1);
    }

    #[test]
    fn test_instruction_display() {
        assert_eq!(format!("{}", AsmInst::Mov(Reg::R1, Operand::Name('a'))), "MOV R1, a");
        assert_eq!(format!("{}", AsmInst::Mov(Reg::R2, Operand::Reg(Reg::R1))), "MOV R2, R1");
        assert_eq!(format!("{}", AsmInst::Div(Reg::R2, Reg::R1)), "DIV R2, R1");
    }

    #[test]
    fn test_arithmetic_mnemonics() {
        let mnemonics: Vec<&str> = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div]
            .into_iter()
            .filter_map(|op| AsmInst::arithmetic(op, Reg::R2, Reg::R1))
            .map(|inst| inst.mnemonic())
            .collect();
        assert_eq!(mnemonics, vec!["ADD", "SUB", "MUL", "DIV"]);
        assert_eq!(AsmInst::arithmetic(BinaryOp::Assign, Reg::R2, Reg::R1), None);
    }
}
