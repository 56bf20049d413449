//! Shared lexical layer for cppify: the ordered token catalog and the `tokenize` scanner.
//!
//! This crate is dependency-light and deliberately decoupled from the translators. The translators
//! match whole lines on their own; the catalog is an independent capability used by the `--lex`
//! debug flag and available to any future token-driven translator.
//!
//! ## Examples
//! ```rust
//! use cppify_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::tokenize("x = 5 # comment");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! ```

pub mod lexer;
