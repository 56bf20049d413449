//! cppify language vocabulary registries.
//!
//! This module is the “front door” for vocabulary: the closed set of input dialects and the target
//! C++ spellings emitted by the translators.
//!
//! The design goal is to avoid stringly-typed checks scattered across the translators and CLI.
//! Callers work with the stable [`dialects::DialectId`] and look up spellings via registry tables.
//!
//! ## Examples
//! ```rust
//! use cppify_core::lang::dialects::{self, DialectId};
//!
//! assert_eq!(dialects::from_str("Python"), Some(DialectId::Python));
//! assert_eq!(dialects::as_str(DialectId::Java), "java");
//! ```

pub mod cpp;
pub mod dialects;
