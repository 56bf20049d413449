//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};

use cppify_core::lang::dialects;
use cppify_syntax::lexer;

use super::shell::{self, ShellConfig};
use super::{CliError, CliResult, ExitCode};
use crate::backend::EmitConfig;
use crate::dispatch;

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during translation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Read all of stdin as source text.
pub fn read_stdin() -> CliResult<String> {
    let mut source = String::new();
    io::stdin()
        .take(MAX_SOURCE_SIZE + 1)
        .read_to_string(&mut source)
        .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
    if source.len() as u64 > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source on stdin is too large (max {} bytes)",
            MAX_SOURCE_SIZE
        )));
    }
    Ok(source)
}

/// Lex and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for tok in lexer::tokenize(&source) {
        println!("{}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Translate `source` and print the generated C++.
pub fn translate_source(dialect: &str, source: &str, indent: usize) -> CliResult<ExitCode> {
    let config = EmitConfig::new().with_indent_width(indent);
    let cpp = dispatch::dispatch_with_config(dialect, source, &config)?;
    println!("{}", cpp);
    Ok(ExitCode::SUCCESS)
}

/// List supported dialects.
pub fn list_dialects() -> CliResult<ExitCode> {
    for info in dialects::DIALECTS {
        println!("{:<12} {}", info.canonical, info.description);
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the interactive shell on the terminal.
pub fn interactive() -> CliResult<ExitCode> {
    let mut editor = rustyline::DefaultEditor::new()
        .map_err(|e| CliError::failure(format!("Cannot start line editor: {}", e)))?;
    let mut stdout = io::stdout().lock();
    shell::run_shell(&mut editor, &mut stdout, &ShellConfig::default())
        .map_err(|e| CliError::failure(format!("Shell I/O error: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.py").unwrap_err();
        assert!(err.message.contains("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_translate_source_unsupported_dialect() {
        let err = translate_source("Fortran", "x = 1", 4).unwrap_err();
        assert!(err.message.contains("Fortran"));
    }

    #[test]
    fn test_translate_source_success() {
        assert_eq!(translate_source("python", "x = 1", 4).unwrap(), ExitCode::SUCCESS);
    }
}
