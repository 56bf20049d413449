//! JavaScript-like → C++ rules.
//!
//! - `// text` → `// text`
//! - `console.log(args)` → `cout << args << endl;`
//! - lines containing `let `, `var ` or `const ` → every such keyword replaced with `auto `, then
//!   `;`-terminated (a source `;` is kept, giving `;;`)

use cppify_core::lang::cpp;
use cppify_core::lang::dialects::{self, DialectId};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{DialectTranslator, call_pattern_for};

static CONSOLE_LOG_CALL: Lazy<Regex> = Lazy::new(|| call_pattern_for(DialectId::JavaScript));

/// Translator for JavaScript-like source.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptTranslator;

impl DialectTranslator for JavaScriptTranslator {
    fn dialect(&self) -> DialectId {
        DialectId::JavaScript
    }

    fn call_pattern(&self) -> &Regex {
        &CONSOLE_LOG_CALL
    }

    fn declaration(&self, line: &str) -> Option<String> {
        let markers = dialects::info_for(DialectId::JavaScript).declaration_markers;
        if !markers.iter().any(|m| line.contains(m)) {
            return None;
        }
        let auto = format!("{} ", cpp::AUTO);
        Some(
            markers
                .iter()
                .fold(line.to_string(), |acc, marker| acc.replace(marker, &auto)),
        )
    }
}
