//! Text and JSON rendering of compilation results

use crate::pipeline::{Compilation, Outcome};
use clap::ValueEnum;
use suc_frontend::Expression;

/// Which part of the result to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Three-address code
    Intermediate,
    /// Two-register object code with its trailer
    Object,
    /// Labeled display tree
    Tree,
    /// Register count only
    Registers,
    /// Everything
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Indented listing of a labeled tree, e.g. `+ (2)`, with the root marked
pub fn render_tree(root: &Expression) -> String {
    let mut out = format!("{} ({})  <- root\n", root.symbol(), root.label);
    render_children(root, "", &mut out);
    out
}

fn render_children(node: &Expression, prefix: &str, out: &mut String) {
    let children: Vec<&Expression> = node.left().into_iter().chain(node.right()).collect();
    let last = children.len().saturating_sub(1);
    for (index, child) in children.into_iter().enumerate() {
        let (branch, extension) = if index == last {
            ("`-- ", "    ")
        } else {
            ("|-- ", "|   ")
        };
        out.push_str(&format!("{prefix}{branch}{} ({})\n", child.symbol(), child.label));
        render_children(child, &format!("{prefix}{extension}"), out);
    }
}

fn indented(lines: &[String]) -> String {
    lines.iter().map(|line| format!("  {line}\n")).collect()
}

fn object_listing(compilation: &Compilation) -> Vec<String> {
    let mut lines = compilation.object.clone();
    lines.extend(compilation.trailer.clone());
    lines
}

/// Plain-text block for one compiled expression
pub fn render_text(compilation: &Compilation, emit: Emit) -> String {
    match emit {
        Emit::Intermediate => compilation
            .intermediate
            .iter()
            .map(|line| format!("{line}\n"))
            .collect(),
        Emit::Object => object_listing(compilation)
            .iter()
            .map(|line| format!("{line}\n"))
            .collect(),
        Emit::Tree => render_tree(&compilation.tree),
        Emit::Registers => format!("{}\n", compilation.registers),
        Emit::All => {
            let mut out = format!("Expression: {}\n", compilation.expression);
            out.push_str(&format!("Registers needed: {}\n", compilation.registers));
            out.push_str("\nIntermediate code:\n");
            out.push_str(&indented(&compilation.intermediate));
            out.push_str("\nObject code:\n");
            out.push_str(&indented(&object_listing(compilation)));
            out.push_str("\nTree:\n");
            out.push_str(&render_tree(&compilation.tree));
            out
        }
    }
}

impl Emit {
    /// JSON fields of a compiled outcome kept for this selection, besides
    /// `status` and `expression`
    fn json_fields(self) -> &'static [&'static str] {
        match self {
            Emit::Intermediate => &["intermediate"],
            Emit::Object => &["object", "trailer"],
            Emit::Tree => &["tree"],
            Emit::Registers => &["registers"],
            Emit::All => &["tree", "registers", "intermediate", "object", "trailer"],
        }
    }
}

/// Pretty-printed JSON array of all outcomes. Compiled entries keep only
/// the fields `emit` selects; failed entries are always complete.
pub fn render_json(outcomes: &[Outcome], emit: Emit) -> Result<String, serde_json::Error> {
    let mut values = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let mut value = serde_json::to_value(outcome)?;
        if let (Outcome::Compiled(_), Some(fields)) = (outcome, value.as_object_mut()) {
            let keep = emit.json_fields();
            fields.retain(|key, _| key == "status" || key == "expression" || keep.contains(&key.as_str()));
        }
        values.push(value);
    }
    serde_json::to_string_pretty(&values)
}
