//! Token types for the cppify token catalog.
//!
//! ## Notes
//! - Tokens carry their literal text but no source offset; nothing downstream needs positions yet.
//! - [`TokenKind`] is a closed set. Its declaration order is the catalog's match priority.

use std::fmt;

/// Kind of token produced by [`super::tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    String,
    Number,
    Identifier,
    Assign,
    ArithOp,
    Paren,
    Brace,
    Comma,
    Colon,
    Newline,
    Space,
}

impl TokenKind {
    /// Name of the capture group this kind occupies in the combined pattern.
    pub const fn group_name(self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::ArithOp => "ARITH_OP",
            TokenKind::Paren => "PAREN",
            TokenKind::Brace => "BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Space => "SPACE",
        }
    }

    /// Whether tokens of this kind are matched but left out of the scanner's output.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Space)
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}
