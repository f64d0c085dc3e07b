//! Sethi-Ullman Compiler - Object Code Generation
//!
//! This crate lowers an expression tree to a stylized two-register
//! pseudo-assembly. It includes:
//!
//! - The register and instruction model (`asm`)
//! - The tree walk that spills every left result into R2 (`lower`)
//! - Rendering of instructions to text lines (`emit`)

pub mod asm;
pub mod emit;
pub mod lower;

pub use asm::{AsmInst, Operand, Reg, RESULT_REGISTER};
pub use emit::emit_instructions;
pub use lower::ObjectCodeGenerator;

use suc_common::CompilerError;
use suc_frontend::Expression;

/// Main entry point for object code generation
pub fn generate_object(tree: &Expression) -> Result<Vec<String>, CompilerError> {
    let instructions = ObjectCodeGenerator::new().generate(tree)?;
    Ok(emit_instructions(&instructions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use suc_frontend::parse;

    #[test]
    fn test_single_operand() {
        let lines = generate_object(&parse("a").unwrap()).unwrap();
        assert_eq!(lines, vec!["MOV R1, a"]);
    }

    #[test]
    fn test_basic_code_generation() {
        let lines = generate_object(&parse("a+b").unwrap()).unwrap();
        assert_eq!(
            lines,
            vec!["MOV R1, a", "MOV R2, R1", "MOV R1, b", "ADD R2, R1", "MOV R1, R2"]
        );
    }
}
