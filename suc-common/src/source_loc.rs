//! Source location tracking for error reporting
//!
//! Expressions are single lines, but the driver reads batches from files, so
//! locations still carry a filename and a line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source file (line and column are 1-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Create a location with filename
    pub fn new(filename: &str, line: u32, column: u32) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column,
        }
    }

    /// Location inside an expression typed directly by the user
    pub fn at_column(column: u32) -> Self {
        Self::new("<input>", 1, column)
    }

    /// Create a dummy location for synthetic nodes
    pub fn dummy() -> Self {
        Self::new("<synthetic>", 0, 0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Helper for creating source locations during scanning
#[derive(Debug, Clone)]
pub struct SourceTracker {
    filename: String,
    line: u32,
    column: u32,
}

impl SourceTracker {
    pub fn new(filename: &str) -> Self {
        Self::starting_at(filename, 1)
    }

    /// Tracker for an expression that sits on `line` of a larger file
    pub fn starting_at(filename: &str, line: u32) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column: 1,
        }
    }

    /// Get current location
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(&self.filename, self.line, self.column)
    }

    /// Advance by one character
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for SourceTracker {
    fn default() -> Self {
        Self::new("<input>")
    }
}
