//! Java-like → C++ rules.
//!
//! - `// text` → `// text`
//! - `System.out.println(args)` → `cout << args << endl;`
//! - lines containing `int `, `double ` or `String ` are already typed and pass through
//!   `;`-terminated
//!
//! The Java-like skeleton has no `int main() {` line but still ends with `return 0;` and `}`.

use cppify_core::lang::dialects::{self, DialectId};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{DialectTranslator, call_pattern_for};

static PRINTLN_CALL: Lazy<Regex> = Lazy::new(|| call_pattern_for(DialectId::Java));

/// Translator for Java-like source.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTranslator;

impl DialectTranslator for JavaTranslator {
    fn dialect(&self) -> DialectId {
        DialectId::Java
    }

    fn call_pattern(&self) -> &Regex {
        &PRINTLN_CALL
    }

    fn declaration(&self, line: &str) -> Option<String> {
        dialects::info_for(DialectId::Java)
            .declaration_markers
            .iter()
            .any(|m| line.contains(m))
            .then(|| line.to_string())
    }
}
