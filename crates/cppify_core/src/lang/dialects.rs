//! Define the closed set of source dialects cppify can translate.
//!
//! This module is the single source of truth for dialect names: a stable identifier
//! ([`DialectId`]) plus a const metadata table ([`DIALECTS`]) that records the canonical name and the
//! surface spellings each translator keys on.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive**: `"Python"`, `"PYTHON"` and `"python"` resolve to
//!   the same dialect.
//! - Only the Python-like and JavaScript-like skeletons open `int main() {`. The Java-like skeleton
//!   still closes one (see [`DialectInfo::opens_entry_point`]).
//!
//! ## Examples
//! ```rust
//! use cppify_core::lang::dialects::{self, DialectId};
//!
//! assert_eq!(dialects::from_str("JavaScript"), Some(DialectId::JavaScript));
//! assert_eq!(dialects::comment_marker(DialectId::Python), "#");
//! assert_eq!(dialects::from_str("ruby"), None);
//! ```

/// Stable identifier for every supported source dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectId {
    Python,
    JavaScript,
    Java,
}

/// Metadata for a source dialect.
#[derive(Debug, Clone, Copy)]
pub struct DialectInfo {
    pub id: DialectId,
    /// Lowercase lookup key (`"python"`, `"javascript"`, `"java"`).
    pub canonical: &'static str,
    /// Human-facing name used in banners and listings.
    pub display_name: &'static str,
    /// Prefix marking a whole-line comment.
    pub comment_marker: &'static str,
    /// Console-output call, without the opening parenthesis.
    pub output_call: &'static str,
    /// Substrings marking a variable declaration line.
    ///
    /// Empty for the Python-like dialect, which detects assignments by `=` instead.
    pub declaration_markers: &'static [&'static str],
    /// Whether the emitted skeleton opens `int main() {`.
    pub opens_entry_point: bool,
    pub description: &'static str,
}

/// Registry of all supported dialects, in listing order.
pub const DIALECTS: &[DialectInfo] = &[
    DialectInfo {
        id: DialectId::Python,
        canonical: "python",
        display_name: "Python",
        comment_marker: "#",
        output_call: "print",
        declaration_markers: &[],
        opens_entry_point: true,
        description: "`#` comments, `print(...)` with `.format(...)` concatenation, `name = value` as `auto`",
    },
    DialectInfo {
        id: DialectId::JavaScript,
        canonical: "javascript",
        display_name: "JavaScript",
        comment_marker: "//",
        output_call: "console.log",
        declaration_markers: &["let ", "var ", "const "],
        opens_entry_point: true,
        description: "`//` comments, `console.log(...)`, `let`/`var`/`const` declarations as `auto`",
    },
    DialectInfo {
        id: DialectId::Java,
        canonical: "java",
        display_name: "Java",
        comment_marker: "//",
        output_call: "System.out.println",
        declaration_markers: &["int ", "double ", "String "],
        opens_entry_point: false,
        description: "`//` comments, `System.out.println(...)`, `int`/`double`/`String` declarations kept",
    },
];

/// Return the canonical (lowercase) name of a dialect.
pub fn as_str(id: DialectId) -> &'static str {
    info_for(id).canonical
}

/// Return the comment marker of a dialect.
pub fn comment_marker(id: DialectId) -> &'static str {
    info_for(id).comment_marker
}

/// Return the console-output call name of a dialect.
pub fn output_call(id: DialectId) -> &'static str {
    info_for(id).output_call
}

/// Return the full metadata entry for a dialect.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DialectId) -> &'static DialectInfo {
    DIALECTS
        .iter()
        .find(|d| d.id == id)
        .expect("dialect info missing")
}

/// Resolve a dialect name to its identifier.
///
/// ## Notes
/// - Matching is **case-insensitive**; surrounding whitespace is *not* stripped.
pub fn from_str(name: &str) -> Option<DialectId> {
    let lowered = name.to_lowercase();
    DIALECTS.iter().find(|d| d.canonical == lowered).map(|d| d.id)
}

/// Return the canonical names of all dialects, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    DIALECTS.iter().map(|d| d.canonical)
}

impl std::fmt::Display for DialectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(info_for(*self).display_name)
    }
}
