//! Define error types for source → C++ translation.
//!
//! ## Notes
//!
//! - Errors are raised at the point of detection and never recovered inside the core: a translation either returns
//!   a complete program or fails for that request.
//! - Lines no rule recognizes are *not* errors; they pass through as statements.

use cppify_core::lang::dialects::{self, DialectId};
use miette::Diagnostic;
use thiserror::Error;

/// Error during dispatch or translation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TranspileError {
    /// The requested dialect name is not in the registry. `name` keeps the caller's casing.
    #[error("Unsupported language: {name}")]
    #[diagnostic(
        code(cppify::unsupported_dialect),
        help("supported languages are: python, javascript, java (any letter casing)")
    )]
    UnsupportedDialect { name: String },

    /// A console-output line whose argument could not be captured.
    #[error("malformed `{call}(...)` call in {dialect} source: {line}")]
    #[diagnostic(
        code(cppify::malformed_output_call),
        help("the call and its closing parenthesis must be on the same line")
    )]
    MalformedOutputCall {
        dialect: DialectId,
        call: &'static str,
        line: String,
    },
}

impl TranspileError {
    pub fn unsupported_dialect(name: impl Into<String>) -> Self {
        Self::UnsupportedDialect { name: name.into() }
    }

    pub fn malformed_output_call(dialect: DialectId, line: impl Into<String>) -> Self {
        Self::MalformedOutputCall {
            dialect,
            call: dialects::output_call(dialect),
            line: line.into(),
        }
    }
}

/// Result type for translation operations.
pub type TranspileResult<T> = Result<T, TranspileError>;
