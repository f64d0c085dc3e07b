//! Error handling for the Sethi-Ullman compiler
//!
//! Only the parser can reject user input. Labeling and intermediate code
//! generation are total over parsed trees; object code generation only fails
//! when a caller hands it a node the parser never builds.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilerError {
    #[error("{message} (at {location})")]
    MalformedExpression {
        location: SourceLocation,
        message: String,
    },

    #[error("Code generation error: {message}")]
    Codegen { message: String },

    #[error("Internal compiler error: {message}")]
    Internal { message: String },
}

impl CompilerError {
    /// Create a malformed expression error
    pub fn malformed(message: impl Into<String>, location: SourceLocation) -> Self {
        CompilerError::MalformedExpression {
            location,
            message: message.into(),
        }
    }

    /// Create a codegen error
    pub fn codegen_error(message: impl Into<String>) -> Self {
        CompilerError::Codegen {
            message: message.into(),
        }
    }

    /// True when the error was caused by the user's input rather than the compiler
    pub fn is_malformed_expression(&self) -> bool {
        matches!(self, CompilerError::MalformedExpression { .. })
    }
}

/// Convert from String (for simple error cases)
impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::Internal { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_includes_location() {
        let err = CompilerError::malformed("unexpected character '$'", SourceLocation::at_column(2));
        assert_eq!(err.to_string(), "unexpected character '$' (at <input>:1:2)");
        assert!(err.is_malformed_expression());
    }

    #[test]
    fn test_codegen_error_is_not_user_error() {
        let err = CompilerError::codegen_error("no mnemonic for '='");
        assert!(!err.is_malformed_expression());
        assert_eq!(err.to_string(), "Code generation error: no mnemonic for '='");
    }

    #[test]
    fn test_from_string_is_internal() {
        let err: CompilerError = "operand stack emptied unexpectedly".to_string().into();
        assert!(matches!(err, CompilerError::Internal { .. }));
        assert!(!err.is_malformed_expression());
    }
}
