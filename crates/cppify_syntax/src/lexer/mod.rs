//! Token catalog and scanner.
//!
//! The catalog is an ordered list of `(kind, pattern)` rules compiled into a single alternation.
//! Scanning walks the input left to right; at each position the first rule (in catalog order) that
//! matches wins and the scan advances past it.
//!
//! ## Notes
//! - Characters no rule matches are skipped silently. They never produce an error.
//! - `Comment` and `Space` tokens are matched to make progress, then dropped. `Newline` is kept.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use once_cell::sync::Lazy;
use regex::Regex;

/// One entry of the token catalog.
#[derive(Debug, Clone, Copy)]
pub struct TokenRule {
    pub kind: TokenKind,
    pub pattern: &'static str,
}

/// The token catalog, in match-priority order.
pub const TOKEN_RULES: &[TokenRule] = &[
    rule(TokenKind::Comment, r"#.*"),
    rule(TokenKind::String, r#"".*?"|'.*?'"#),
    rule(TokenKind::Number, r"\b\d+(\.\d+)?\b"),
    rule(TokenKind::Identifier, r"\b[A-Za-z_][A-Za-z0-9_]*\b"),
    rule(TokenKind::Assign, r"="),
    rule(TokenKind::ArithOp, r"[+\-*/%]"),
    rule(TokenKind::Paren, r"[()]"),
    rule(TokenKind::Brace, r"[{}]"),
    rule(TokenKind::Comma, r","),
    rule(TokenKind::Colon, r":"),
    rule(TokenKind::Newline, r"\n"),
    rule(TokenKind::Space, r"[ \t]+"),
];

/// Combined alternation of every catalog rule, one named group per kind.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = TOKEN_RULES
        .iter()
        .map(|r| format!("(?P<{}>{})", r.kind.group_name(), r.pattern))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("INVARIANT: token catalog patterns are valid regex syntax")
});

/// Scan `source` into tokens, dropping comments and whitespace.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    TOKEN_REGEX
        .captures_iter(source)
        .filter_map(|caps| {
            TOKEN_RULES
                .iter()
                .find_map(|r| caps.name(r.kind.group_name()).map(|m| (r.kind, m.as_str())))
        })
        .filter(|(kind, _)| !kind.is_trivia())
        .map(|(kind, text)| Token::new(kind, text))
        .collect()
}

const fn rule(kind: TokenKind, pattern: &'static str) -> TokenRule {
    TokenRule { kind, pattern }
}

// ============================================================================
// TESTS
// ============================================================================
