//! Rendering of pseudo-assembly to text

use crate::asm::AsmInst;

/// One line per instruction, in order
pub fn emit_instructions(instructions: &[AsmInst]) -> Vec<String> {
    instructions.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::{Operand, Reg};

    #[test]
    fn test_emit_instructions() {
        let instructions = [
            AsmInst::Mov(Reg::R1, Operand::Name('a')),
            AsmInst::Mov(Reg::R2, Operand::Reg(Reg::R1)),
        ];
        assert_eq!(emit_instructions(&instructions), vec!["MOV R1, a", "MOV R2, R1"]);
        assert!(emit_instructions(&[]).is_empty());
    }
}
