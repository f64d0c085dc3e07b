//! Sethi-Ullman Compiler Driver
//!
//! Runs the full pipeline for the command-line tool: parse, label the
//! display tree, generate both code listings, and render the result.

pub mod pipeline;
pub mod render;

pub use pipeline::{compile_batch, compile_expression, compile_expression_at, Compilation, Outcome};
pub use render::{render_json, render_text, render_tree, Emit, OutputFormat};
