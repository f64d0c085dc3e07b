//! Sethi-Ullman Compiler - Intermediate Representation
//!
//! This crate holds the two tree walks that sit between the parser and the
//! object code generator:
//!
//! - Sethi-Ullman labeling of every node with its register need
//! - Lowering of the tree to three-address code with numbered temporaries

pub mod builder;
pub mod ir;
pub mod labeling;

pub use builder::{generate_intermediate, generate_intermediate_code, IntermediateCode, IrBuilder};
pub use ir::{Instruction, TempId, Value};
pub use labeling::{label_tree, register_requirement, MIN_REGISTERS};
