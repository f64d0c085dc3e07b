//! Lowering of expression trees to three-address code
//!
//! Temporaries are numbered in post-order across the whole walk, so the
//! counter lives in the builder rather than in any one subtree.

use crate::ir::{Instruction, TempId, Value};
use log::debug;
use suc_frontend::{Expression, ExpressionKind};

/// Output of one lowering run
#[derive(Debug, Clone, PartialEq)]
pub struct IntermediateCode {
    pub instructions: Vec<Instruction>,
    /// Where the value of the whole tree ends up
    pub result: Value,
}

impl IntermediateCode {
    /// Instructions rendered one per line
    pub fn lines(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }
}

/// Three-address code builder
pub struct IrBuilder {
    next_temp_id: TempId,
    instructions: Vec<Instruction>,
}

impl IrBuilder {
    /// Builder whose first temporary is `t1`
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first_temp: TempId) -> Self {
        Self {
            next_temp_id: first_temp,
            instructions: Vec::new(),
        }
    }

    pub fn new_temp(&mut self) -> TempId {
        let temp = self.next_temp_id;
        self.next_temp_id += 1;
        temp
    }

    /// The number the next temporary will get
    pub fn next_temp_id(&self) -> TempId {
        self.next_temp_id
    }

    /// Emit code for `expr` (left subtree, right subtree, then the node
    /// itself) and return where its value lives
    pub fn lower_expression(&mut self, expr: &Expression) -> Value {
        match &expr.kind {
            ExpressionKind::Leaf(name) => Value::Operand(*name),
            ExpressionKind::Binary { op, left, right } => {
                let lhs = self.lower_expression(left);
                let rhs = self.lower_expression(right);
                let result = self.new_temp();
                let inst = Instruction { result, op: *op, lhs, rhs };
                debug!("emit {inst}");
                self.instructions.push(inst);
                Value::Temp(result)
            }
        }
    }

    pub fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower `tree`, drawing temporaries from `temp_counter` and leaving it at
/// the next unused number
pub fn generate_intermediate_code(tree: &Expression, temp_counter: &mut TempId) -> IntermediateCode {
    let mut builder = IrBuilder::starting_at(*temp_counter);
    let result = builder.lower_expression(tree);
    *temp_counter = builder.next_temp_id();
    IntermediateCode {
        instructions: builder.finish(),
        result,
    }
}

/// Three-address lines for `tree`, numbering temporaries from `t1`
pub fn generate_intermediate(tree: &Expression) -> Vec<String> {
    let mut temp_counter = 1;
    generate_intermediate_code(tree, &mut temp_counter).lines()
}
