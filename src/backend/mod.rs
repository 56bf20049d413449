//! cppify translation backend
//!
//! This module turns dialect source text into C++ program text.
//!
//! The pipeline is:
//! 1. Split the source into stripped lines
//! 2. Rewrite each line through the dialect's rules → C++ statement lines
//! 3. Wrap the statements in the fixed program skeleton
//!
//! ## Module Organization
//!
//! - `translate/` - Per-dialect rules and the shared line driver
//! - `cpp_emitter.rs` - Low-level C++ line builder and program skeleton
//! - `config.rs` - Emission settings
//! - `errors.rs` - Translation errors

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod cpp_emitter;
pub mod errors;
pub mod translate;

pub use config::EmitConfig;
pub use cpp_emitter::CppEmitter;
pub use errors::{TranspileError, TranspileResult};
pub use translate::{
    DialectTranslator, JavaScriptTranslator, JavaTranslator, PythonTranslator, translate_java_like,
    translate_javascript_like, translate_python_like,
};
