//! The parse → label → generate pipeline
//!
//! Every call builds its own tree and its own temporary counter, so
//! compiling the same text twice yields identical output.

use log::{debug, info};
use serde::Serialize;
use suc_codegen::{generate_object, RESULT_REGISTER};
use suc_common::CompilerError;
use suc_frontend::{Expression, Frontend};
use suc_ir::{generate_intermediate, label_tree, register_requirement};

/// Everything shown to the user for one expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub expression: String,
    /// `x = <expression>`, labeled; for display only
    pub tree: Expression,
    pub registers: u32,
    pub intermediate: Vec<String>,
    pub object: Vec<String>,
    /// Present whenever there is object code
    pub trailer: Option<String>,
}

/// Result of compiling one line of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Compiled(Compilation),
    Failed { expression: String, error: String },
}

/// Compile an expression typed directly by the user
pub fn compile_expression(source: &str) -> Result<Compilation, CompilerError> {
    run(source, Frontend::parse_source(source)?)
}

/// Compile an expression found on `line` of `filename`
pub fn compile_expression_at(source: &str, filename: &str, line: u32) -> Result<Compilation, CompilerError> {
    run(source, Frontend::parse_source_at(source, filename, line)?)
}

/// Compile every non-empty line of `input`
pub fn compile_batch(input: &str, filename: &str) -> Vec<Outcome> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
            match compile_expression_at(line, filename, line_number) {
                Ok(compilation) => Outcome::Compiled(compilation),
                Err(err) => Outcome::Failed {
                    expression: line.to_string(),
                    error: err.to_string(),
                },
            }
        })
        .collect()
}

fn run(source: &str, parsed: Expression) -> Result<Compilation, CompilerError> {
    let mut tree = Expression::display_root(parsed);
    let root_label = label_tree(&mut tree);
    let registers = register_requirement(root_label);
    debug!("display root label {root_label}, reporting {registers} registers");

    let expression = tree
        .right()
        .ok_or_else(|| CompilerError::from("display tree has no expression".to_string()))?;
    let intermediate = generate_intermediate(expression);
    let object = generate_object(expression)?;
    let trailer = (!object.is_empty())
        .then(|| format!("the final result is in register {RESULT_REGISTER}"));

    info!(
        "compiled {source}: {} intermediate lines, {} object lines",
        intermediate.len(),
        object.len()
    );

    Ok(Compilation {
        expression: source.to_string(),
        tree,
        registers,
        intermediate,
        object,
        trailer,
    })
}
