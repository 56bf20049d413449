//! CLI module for cppify
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - *(no command)* - Interactive shell: prompt for a dialect, read source until a blank line
//! - `translate <dialect> [file]` - Print the C++ translation of a file, `-c` code, or stdin
//! - `dialects` - List supported dialects
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `shell` - Interactive read loop
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod shell;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::backend::TranspileError;
use crate::version::CPPIFY_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a translation error as a miette diagnostic.
    pub fn translation(err: TranspileError) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<TranspileError> for CliError {
    fn from(err: TranspileError) -> Self {
        Self::translation(err)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Translate Python, JavaScript and Java snippets into C++
#[derive(Parser, Debug)]
#[command(name = "cppify")]
#[command(version = CPPIFY_VERSION)]
#[command(about = "Translate Python, JavaScript and Java snippets into C++", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE")]
    pub lex_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate source code and print the generated C++
    Translate {
        /// Source dialect (python, javascript, java; any casing)
        #[arg(value_name = "DIALECT")]
        dialect: String,
        /// Source file (`-` or omitted reads stdin)
        #[arg(value_name = "FILE", conflicts_with = "code")]
        file: Option<PathBuf>,
        /// Translate inline source code
        #[arg(short = 'c', long = "code", value_name = "CODE")]
        code: Option<String>,
        /// Spaces per indentation level in the generated body
        #[arg(long, value_name = "N", default_value_t = 4)]
        indent: usize,
    },

    /// List supported dialects
    Dialects,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Translate {
            dialect,
            file,
            code,
            indent,
        }) => {
            let source = match (code, file) {
                (Some(code), _) => code,
                (None, Some(path)) if path.as_os_str() != "-" => commands::read_source(&path.to_string_lossy())?,
                (None, _) => commands::read_stdin()?,
            };
            commands::translate_source(&dialect, &source, indent)
        }
        Some(Command::Dialects) => commands::list_dialects(),
        None => commands::interactive(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command_is_shell() {
        let cli = Cli::try_parse_from(["cppify"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.lex_file.is_none());
    }

    #[test]
    fn test_cli_parse_translate_file() {
        let cli = Cli::try_parse_from(["cppify", "translate", "python", "main.py"]).unwrap();
        if let Some(Command::Translate {
            dialect,
            file,
            code,
            indent,
        }) = cli.command
        {
            assert_eq!(dialect, "python");
            assert_eq!(file, Some(PathBuf::from("main.py")));
            assert!(code.is_none());
            assert_eq!(indent, 4);
        } else {
            panic!("Expected Translate command");
        }
    }

    #[test]
    fn test_cli_parse_translate_inline_code() {
        let cli = Cli::try_parse_from(["cppify", "translate", "Java", "-c", "int x = 1;", "--indent", "2"]).unwrap();
        if let Some(Command::Translate { code, indent, .. }) = cli.command {
            assert_eq!(code.as_deref(), Some("int x = 1;"));
            assert_eq!(indent, 2);
        } else {
            panic!("Expected Translate command");
        }
    }

    #[test]
    fn test_cli_rejects_file_and_code_together() {
        assert!(Cli::try_parse_from(["cppify", "translate", "python", "a.py", "-c", "x = 1"]).is_err());
    }

    #[test]
    fn test_cli_parse_dialects() {
        let cli = Cli::try_parse_from(["cppify", "dialects"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Dialects)));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["cppify", "--lex", "snippet.py"]).unwrap();
        assert_eq!(cli.lex_file, Some(PathBuf::from("snippet.py")));
    }

    #[test]
    fn test_cli_error_from_translation_error() {
        let err: CliError = TranspileError::unsupported_dialect("Ruby").into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Unsupported language: Ruby"));
    }
}
