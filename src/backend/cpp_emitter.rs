//! C++ code emitter - builds generated program text line by line
//!
//! The emitter owns the program skeleton: [`CppEmitter::open_program`] writes the preamble and
//! enters the body, [`CppEmitter::close_program`] writes the closing lines. Translators only call
//! the statement-level helpers in between.

use cppify_core::lang::cpp;

use super::config::EmitConfig;

/// A buffer of C++ source lines with indentation tracking
#[derive(Debug, Default)]
pub struct CppEmitter {
    lines: Vec<String>,
    indent_level: usize,
    indent_unit: String,
}

impl CppEmitter {
    pub fn new(config: &EmitConfig) -> Self {
        Self {
            lines: Vec::new(),
            indent_level: 0,
            indent_unit: config.indent_unit(),
        }
    }

    /// Join the emitted lines with `\n` (no trailing newline)
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    /// Emitted lines so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        let mut text = self.indent_unit.repeat(self.indent_level);
        text.push_str(s);
        self.lines.push(text);
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write `s;`
    pub fn statement(&mut self, s: &str) {
        let mut text = String::with_capacity(s.len() + 1);
        text.push_str(s);
        text.push(cpp::TERMINATOR);
        self.line(&text);
    }

    /// Write `// text`
    pub fn comment(&mut self, text: &str) {
        self.line(&format!("{} {}", cpp::LINE_COMMENT, text));
    }

    /// Write `cout << arg << endl;`
    pub fn output(&mut self, arg: &str) {
        self.statement(&format!(
            "{cout} {ins} {arg} {ins} {endl}",
            cout = cpp::COUT,
            ins = cpp::INSERT,
            endl = cpp::ENDL,
        ));
    }

    /// Write the includes and `using` line, optionally open `int main() {`, then enter the body.
    ///
    /// The body is indented whether or not the entry point was opened.
    pub fn open_program(&mut self, opens_entry_point: bool) {
        for line in cpp::PREAMBLE {
            self.line(line);
        }
        if opens_entry_point {
            self.line(cpp::ENTRY_POINT_OPEN);
        }
        self.indent();
    }

    /// Write `return 0;` inside the body, leave it, and write the closing brace.
    pub fn close_program(&mut self) {
        let [ret, close] = cpp::CLOSING;
        self.line(ret);
        self.dedent();
        self.line(close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_and_comment_are_indented_in_body() {
        let mut e = CppEmitter::new(&EmitConfig::default());
        e.indent();
        e.statement("x++");
        e.comment("note");
        assert_eq!(e.lines(), ["    x++;", "    // note"]);
    }

    #[test]
    fn test_output_statement() {
        let mut e = CppEmitter::new(&EmitConfig::default());
        e.output("\"hi\"");
        assert_eq!(e.finish(), "cout << \"hi\" << endl;");
    }

    #[test]
    fn test_skeleton_with_entry_point() {
        let mut e = CppEmitter::new(&EmitConfig::default());
        e.open_program(true);
        e.close_program();
        assert_eq!(
            e.finish(),
            "#include <iostream>\n#include <string>\nusing namespace std;\nint main() {\n    return 0;\n}"
        );
    }

    #[test]
    fn test_skeleton_without_entry_point_still_closes() {
        let mut e = CppEmitter::new(&EmitConfig::default());
        e.open_program(false);
        e.close_program();
        assert_eq!(
            e.finish(),
            "#include <iostream>\n#include <string>\nusing namespace std;\n    return 0;\n}"
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let mut e = CppEmitter::new(&EmitConfig::new().with_indent_width(2));
        e.open_program(true);
        e.statement("f()");
        e.close_program();
        assert_eq!(e.lines()[4], "  f();");
        assert_eq!(e.lines()[5], "  return 0;");
        assert_eq!(e.lines()[6], "}");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut e = CppEmitter::new(&EmitConfig::default());
        e.dedent();
        e.line("x");
        assert_eq!(e.lines(), ["x"]);
    }
}
