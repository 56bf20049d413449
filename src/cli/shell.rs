//! Interactive translation shell.
//!
//! Each round prompts for a dialect name, then collects source lines until the first blank line and
//! prints the translation (or the error) before starting over. Typing the exit word at the dialect
//! prompt, or end-of-input anywhere, ends the shell.
//!
//! The loop reads through [`LineSource`] and writes through [`std::io::Write`], so the terminal
//! editor (rustyline) and scripted input are interchangeable.

use std::io::{self, Write};

use cppify_core::lang::dialects::DIALECTS;
use rustyline::error::ReadlineError;

use crate::dispatch;

/// Result of asking a [`LineSource`] for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    Line(String),
    /// Ctrl-C: abandon the current entry.
    Interrupted,
    /// Ctrl-D or end of piped input.
    Eof,
}

/// Something that yields input lines on request.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<LineRead>;
}

impl LineSource for rustyline::DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<LineRead> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(LineRead::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(LineRead::Interrupted),
            Err(ReadlineError::Eof) => Ok(LineRead::Eof),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Prompt asking for the dialect name
    pub dialect_prompt: String,
    /// Prompt shown for each source line
    pub source_prompt: String,
    /// Word (any casing) that ends the shell at the dialect prompt
    pub exit_word: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dialect_prompt: "Enter the input language (or type 'exit' to quit): ".into(),
            source_prompt: String::new(),
            exit_word: "exit".into(),
        }
    }
}

/// Outcome of collecting one source entry.
enum Entry {
    Complete(String),
    /// Input ended mid-entry; translate what was read, then stop.
    Final(String),
    Abandoned,
}

/// Run the shell until the exit word or end of input.
pub fn run_shell<S, W>(input: &mut S, out: &mut W, config: &ShellConfig) -> io::Result<()>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    print_banner(out)?;

    loop {
        let dialect = match input.read_line(&config.dialect_prompt)? {
            LineRead::Line(line) => line.trim().to_string(),
            LineRead::Interrupted => continue,
            LineRead::Eof => break,
        };
        if dialect.to_lowercase() == config.exit_word.to_lowercase() {
            break;
        }

        writeln!(out, "\nEnter the source code in the given language (end with an empty line):")?;
        let (source, last) = match read_entry(input, &config.source_prompt)? {
            Entry::Complete(source) => (source, false),
            Entry::Final(source) => (source, true),
            Entry::Abandoned => continue,
        };

        match dispatch::dispatch(&dialect, &source) {
            Ok(cpp) => {
                writeln!(out, "\nGenerated C++ Code:\n")?;
                writeln!(out, "{}", cpp)?;
            }
            Err(e) => {
                tracing::debug!(error = %e, "translation failed");
                writeln!(out, "\nError: {}", e)?;
            }
        }

        if last {
            break;
        }
    }

    writeln!(out, "\nThank you for using the Language-to-C++ Transpiler! Have a great day!")?;
    out.flush()
}

fn print_banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let names: Vec<String> = DIALECTS.iter().map(|d| d.id.to_string()).collect();
    writeln!(out, "Welcome to the Language-to-C++ Transpiler!")?;
    writeln!(
        out,
        "This tool allows you to convert code written in {} into equivalent C++ code.",
        names.join(", ")
    )?;
    writeln!(out, "Supported languages: {}.", names.join(", "))
}

fn read_entry<S: LineSource + ?Sized>(input: &mut S, prompt: &str) -> io::Result<Entry> {
    let mut lines = Vec::new();
    loop {
        match input.read_line(prompt)? {
            LineRead::Line(line) if line.trim().is_empty() => return Ok(Entry::Complete(lines.join("\n"))),
            LineRead::Line(line) => lines.push(line),
            LineRead::Interrupted => return Ok(Entry::Abandoned),
            LineRead::Eof => return Ok(Entry::Final(lines.join("\n"))),
        }
    }
}
