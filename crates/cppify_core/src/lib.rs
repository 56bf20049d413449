//! Provide the canonical vocabulary shared by the cppify tokenizer, translators and CLI.
//!
//! This crate is intentionally small and dependency-free. It answers two questions:
//! - which source dialects exist and how each one spells comments and console output, and
//! - how the generated C++ program spells its skeleton and statements.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no translator logic.
//! - Registries live in `const` tables so every caller sees the same spellings.

pub mod lang;
