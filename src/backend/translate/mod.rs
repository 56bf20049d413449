//! Per-dialect line translators.
//!
//! Every translator works one source line at a time with no cross-line context. The shared driver
//! ([`DialectTranslator::translate_with_config`]) splits on `\n`, strips each line, skips empty
//! lines, and applies the first matching rule:
//!
//! 1. comment line (starts with the dialect's comment marker) → `// text`
//! 2. output-call line (contains `<call>(`) → `cout << arg << endl;`
//! 3. declaration line (dialect-specific shape) → rewritten statement
//! 4. anything else → the line itself, `;`-terminated
//!
//! ## Notes
//!
//! - The output-call argument is a single greedy capture from the call's `(` to the *last* `)` on the
//!   line. Nested or repeated calls on one line are not balanced; a call with no `)` after it is a
//!   [`TranspileError::MalformedOutputCall`].
//! - Source text is never validated: translators rewrite surface text only.

mod java;
mod javascript;
mod python;

pub use java::JavaTranslator;
pub use javascript::JavaScriptTranslator;
pub use python::PythonTranslator;

use std::borrow::Cow;

use cppify_core::lang::dialects::{self, DialectId};
use regex::Regex;

use super::config::EmitConfig;
use super::cpp_emitter::CppEmitter;
use super::errors::{TranspileError, TranspileResult};

/// A source dialect's translation rules.
///
/// Implementors supply the dialect-specific pieces; the rule order and program skeleton are shared.
pub trait DialectTranslator: Send + Sync {
    /// Dialect this translator handles.
    fn dialect(&self) -> DialectId;

    /// Pattern capturing the output-call argument in group 1.
    fn call_pattern(&self) -> &Regex;

    /// Rewrite a captured output-call argument before it is streamed to `cout`.
    fn output_argument<'a>(&self, captured: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(captured)
    }

    /// Return the statement body for a declaration line, or `None` if `line` is not one.
    fn declaration(&self, line: &str) -> Option<String>;

    /// Translate one stripped, non-empty line into `out`.
    fn translate_line(&self, line: &str, out: &mut CppEmitter) -> TranspileResult<()> {
        let info = dialects::info_for(self.dialect());

        if let Some(text) = line.strip_prefix(info.comment_marker) {
            out.comment(text.trim_start());
        } else if is_output_call(line, info.output_call) {
            let captured = self
                .call_pattern()
                .captures(line)
                .and_then(|caps| caps.get(1))
                .ok_or_else(|| TranspileError::malformed_output_call(self.dialect(), line))?;
            out.output(&self.output_argument(captured.as_str()));
        } else if let Some(body) = self.declaration(line) {
            out.statement(&body);
        } else {
            out.statement(line);
        }
        Ok(())
    }

    /// Translate a full source blob into a complete C++ program.
    #[tracing::instrument(skip_all, fields(dialect = %self.dialect(), source_len = source.len()))]
    fn translate_with_config(&self, source: &str, config: &EmitConfig) -> TranspileResult<String> {
        let mut out = CppEmitter::new(config);
        out.open_program(dialects::info_for(self.dialect()).opens_entry_point);

        let mut translated = 0usize;
        for line in source.split('\n').map(str::trim) {
            if line.is_empty() {
                continue;
            }
            self.translate_line(line, &mut out)?;
            translated += 1;
        }

        out.close_program();
        tracing::debug!(translated, "translation finished");
        Ok(out.finish())
    }

    /// Translate with the default [`EmitConfig`].
    fn translate(&self, source: &str) -> TranspileResult<String> {
        self.translate_with_config(source, &EmitConfig::default())
    }
}

/// Whether `line` contains `call` immediately followed by `(`.
fn is_output_call(line: &str, call: &str) -> bool {
    line.match_indices(call)
        .any(|(at, _)| line[at + call.len()..].starts_with('('))
}

/// Build the greedy `call\((.*)\)` argument pattern for an output call.
fn call_pattern_for(dialect: DialectId) -> Regex {
    let pattern = format!(r"{}\((.*)\)", regex::escape(dialects::output_call(dialect)));
    Regex::new(&pattern).expect("INVARIANT: output-call pattern is valid regex syntax")
}

/// Translate Python-like source.
pub fn translate_python_like(source: &str) -> TranspileResult<String> {
    PythonTranslator.translate(source)
}

/// Translate JavaScript-like source.
pub fn translate_javascript_like(source: &str) -> TranspileResult<String> {
    JavaScriptTranslator.translate(source)
}

/// Translate Java-like source.
pub fn translate_java_like(source: &str) -> TranspileResult<String> {
    JavaTranslator.translate(source)
}
