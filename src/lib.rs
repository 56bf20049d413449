#![forbid(unsafe_code)]
//! cppify: translate Python, JavaScript and Java snippets into minimal C++ programs.
//!
//! Translation is line-oriented surface rewriting, not compilation: each source line is matched
//! against a short list of shapes (comment, console output, declaration, anything else) and
//! rewritten to a C++ statement, then the statements are wrapped in a fixed program skeleton.
//!
//! ## Crates
//!
//! - `cppify_core` - dialect registry and C++ vocabulary
//! - `cppify_syntax` - the token catalog (`tokenize`)
//! - `cppify` (this crate) - translators, dispatch, CLI and interactive shell
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `ok_or_else` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: Static regex construction uses `.expect("INVARIANT: reason")`.
//!
//! ## Examples
//! ```rust
//! let cpp = cppify::dispatch("Python", "x = 5").unwrap();
//! assert!(cpp.contains("    auto x = 5;"));
//! ```

pub mod backend;
pub mod cli;
pub mod dispatch;
pub mod version;

pub use cppify_core::lang::dialects::DialectId;
pub use cppify_syntax::lexer::{Token, TokenKind, tokenize};

pub use backend::{
    EmitConfig, TranspileError, TranspileResult, translate_java_like, translate_javascript_like,
    translate_python_like,
};
pub use dispatch::{dispatch, dispatch_with_config};
