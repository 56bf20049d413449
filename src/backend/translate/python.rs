//! Python-like → C++ rules.
//!
//! - `# text` → `// text`
//! - `print(args)` → `cout << args << endl;`, with `.format(` rewritten to ` + ` and every `)` in the
//!   captured argument dropped
//! - any line with `=` but no `==` → `auto line;`

use std::borrow::Cow;

use cppify_core::lang::cpp;
use cppify_core::lang::dialects::DialectId;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{DialectTranslator, call_pattern_for};

static PRINT_CALL: Lazy<Regex> = Lazy::new(|| call_pattern_for(DialectId::Python));

/// Translator for Python-like source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonTranslator;

impl DialectTranslator for PythonTranslator {
    fn dialect(&self) -> DialectId {
        DialectId::Python
    }

    fn call_pattern(&self) -> &Regex {
        &PRINT_CALL
    }

    fn output_argument<'a>(&self, captured: &'a str) -> Cow<'a, str> {
        if !captured.contains(')') && !captured.contains(".format(") {
            return Cow::Borrowed(captured);
        }
        Cow::Owned(captured.replace(".format(", cpp::CONCAT).replace(')', ""))
    }

    fn declaration(&self, line: &str) -> Option<String> {
        (line.contains('=') && !line.contains("==")).then(|| format!("{} {}", cpp::AUTO, line))
    }
}
