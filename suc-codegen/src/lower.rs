//! Tree walk producing two-register object code
//!
//! Register pressure is never relieved by reuse: the left result is always
//! parked in R2 before the right subtree runs, and every subtree leaves its
//! value in R1. The Sethi-Ullman labels are not consulted.

use crate::asm::{AsmInst, Operand, Reg, RESULT_REGISTER};
use log::debug;
use suc_common::CompilerError;
use suc_frontend::{Expression, ExpressionKind};

/// Object code generator
pub struct ObjectCodeGenerator {
    instructions: Vec<AsmInst>,
}

impl ObjectCodeGenerator {
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Generate code for the whole tree. Fails only on the `=` display node.
    pub fn generate(mut self, tree: &Expression) -> Result<Vec<AsmInst>, CompilerError> {
        self.lower_expression(tree)?;
        Ok(self.instructions)
    }

    fn emit(&mut self, inst: AsmInst) {
        debug!("emit {inst}");
        self.instructions.push(inst);
    }

    fn lower_expression(&mut self, expr: &Expression) -> Result<Reg, CompilerError> {
        match &expr.kind {
            ExpressionKind::Leaf(name) => {
                self.emit(AsmInst::Mov(RESULT_REGISTER, Operand::Name(*name)));
            }
            ExpressionKind::Binary { op, left, right } => {
                let combine = AsmInst::arithmetic(*op, Reg::R2, RESULT_REGISTER).ok_or_else(|| {
                    CompilerError::codegen_error(format!(
                        "operator '{op}' at {} has no machine instruction",
                        expr.location
                    ))
                })?;

                self.lower_expression(left)?;
                self.emit(AsmInst::Mov(Reg::R2, Operand::Reg(RESULT_REGISTER)));
                self.lower_expression(right)?;
                self.emit(combine);
                self.emit(AsmInst::Mov(RESULT_REGISTER, Operand::Reg(Reg::R2)));
            }
        }
        Ok(RESULT_REGISTER)
    }
}

impl Default for ObjectCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
