//! Sethi-Ullman Compiler command-line interface
//!
//! Compiles one expression given on the command line, or a batch of
//! expressions (one per line) from a file or stdin.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use suc_driver::{compile_batch, render_json, render_text, Emit, Outcome, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "suc")]
#[command(about = "Sethi-Ullman register labeling and code generation for arithmetic expressions")]
#[command(version)]
struct Cli {
    /// Expression to compile, e.g. a+b*c-d (no spaces)
    expression: Option<String>,

    /// Read expressions from FILE, one per line, instead of the command line
    #[arg(short, long, value_name = "FILE", conflicts_with = "expression")]
    input: Option<PathBuf>,

    /// Part of the result to print
    #[arg(short, long, value_enum, default_value_t = Emit::All)]
    emit: Emit,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let outcomes = match (&cli.expression, &cli.input) {
        (Some(expression), _) => compile_single(expression),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            compile_batch(&text, &path.display().to_string())
        }
        (None, None) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read expressions from stdin")?;
            compile_batch(&text, "<stdin>")
        }
    };
    debug!("{} expression(s) processed", outcomes.len());

    let rendered = match cli.format {
        OutputFormat::Json => {
            let mut json = render_json(&outcomes, cli.emit)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_outcomes_text(&outcomes, cli.emit),
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    let failures = diagnostics(&outcomes);
    for line in &failures {
        eprintln!("{line}");
    }
    if !failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// A command-line expression is compiled as-is: even an empty string is
/// reported instead of skipped.
fn compile_single(expression: &str) -> Vec<Outcome> {
    match suc_driver::compile_expression(expression) {
        Ok(compilation) => vec![Outcome::Compiled(compilation)],
        Err(err) => vec![Outcome::Failed {
            expression: expression.to_string(),
            error: err.to_string(),
        }],
    }
}

/// Text blocks of the compiled outcomes; failures only show up in
/// [`diagnostics`]
fn render_outcomes_text(outcomes: &[Outcome], emit: Emit) -> String {
    outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            Outcome::Compiled(compilation) => Some(render_text(compilation, emit)),
            Outcome::Failed { .. } => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One stderr line per failed outcome
fn diagnostics(outcomes: &[Outcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            Outcome::Failed { error, .. } => Some(format!("Invalid expression: {error}")),
            Outcome::Compiled(_) => None,
        })
        .collect()
}
