//! Sethi-Ullman Compiler - Common Types and Utilities
//! 
//! This crate contains the error type and source locations shared by
//! every phase of the expression compiler.

pub mod error;
pub mod source_loc;

pub use error::CompilerError;
pub use source_loc::{SourceLocation, SourceTracker};
