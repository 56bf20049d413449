//! Target C++ vocabulary.
//!
//! Every spelling the translators put into generated programs lives here: the skeleton lines that
//! wrap translated statements and the keywords used when rewriting a line.
//!
//! ## Notes
//! - Skeleton lines are stored without indentation. The emitter decides which lines are indented.
//! - The skeleton is part of the output contract and must stay byte-for-byte stable.
//!
//! ## Examples
//! ```rust
//! use cppify_core::lang::cpp;
//!
//! assert_eq!(cpp::PREAMBLE[0], "#include <iostream>");
//! assert_eq!(cpp::CLOSING, ["return 0;", "}"]);
//! ```

/// Includes and namespace declaration opening every generated program.
pub const PREAMBLE: [&str; 3] = ["#include <iostream>", "#include <string>", "using namespace std;"];

/// Entry-point opener emitted after [`PREAMBLE`] for dialects that open one.
pub const ENTRY_POINT_OPEN: &str = "int main() {";

/// Closing lines emitted after every translated body.
///
/// The first line is a statement (indented like the body); the second closes the entry point.
pub const CLOSING: [&str; 2] = ["return 0;", "}"];

/// Inferred-type keyword used for rewritten declarations.
pub const AUTO: &str = "auto";

/// Console output stream.
pub const COUT: &str = "cout";

/// Stream insertion operator.
pub const INSERT: &str = "<<";

/// End-of-line manipulator.
pub const ENDL: &str = "endl";

/// Line comment marker.
pub const LINE_COMMENT: &str = "//";

/// Statement terminator.
pub const TERMINATOR: char = ';';

/// Concatenation operator substituted for Python `.format(` calls, with surrounding spaces.
pub const CONCAT: &str = " + ";
