//! End-to-end checks of the public dispatch and translate entry points.

use cppify::{TranspileError, dispatch, translate_java_like, translate_javascript_like, translate_python_like};

const PY_PREAMBLE: [&str; 4] = [
    "#include <iostream>",
    "#include <string>",
    "using namespace std;",
    "int main() {",
];

fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[test]
fn test_python_print_and_skeleton() {
    let cpp = translate_python_like("print(\"hi\")").unwrap();
    let got = lines(&cpp);
    assert_eq!(&got[..4], &PY_PREAMBLE);
    assert!(got.contains(&"    cout << \"hi\" << endl;"));
    assert_eq!(&got[got.len() - 2..], &["    return 0;", "}"]);
}

#[test]
fn test_python_assignment() {
    let cpp = translate_python_like("x = 5").unwrap();
    assert!(lines(&cpp).contains(&"    auto x = 5;"));
}

#[test]
fn test_javascript_let_double_terminator() {
    let cpp = translate_javascript_like("let x = 5;").unwrap();
    assert!(lines(&cpp).contains(&"    auto x = 5;;"));
}

#[test]
fn test_java_println_without_entry_point() {
    let cpp = translate_java_like("System.out.println(\"hi\");").unwrap();
    assert!(lines(&cpp).contains(&"    cout << \"hi\" << endl;"));
    assert!(!cpp.contains("int main"));
    assert_eq!(lines(&cpp)[3], "    cout << \"hi\" << endl;");
}

#[test]
fn test_empty_source_is_preamble_plus_closing() {
    let expected_with_main = "#include <iostream>\n#include <string>\nusing namespace std;\nint main() {\n    return 0;\n}";
    let expected_java = "#include <iostream>\n#include <string>\nusing namespace std;\n    return 0;\n}";
    assert_eq!(dispatch("python", "").unwrap(), expected_with_main);
    assert_eq!(dispatch("javascript", "").unwrap(), expected_with_main);
    assert_eq!(dispatch("java", "").unwrap(), expected_java);
}

#[test]
fn test_dispatch_casing() {
    for name in ["Python", "PYTHON", "pYtHoN"] {
        assert_eq!(dispatch(name, "x = 5").unwrap(), dispatch("python", "x = 5").unwrap());
    }
}

#[test]
fn test_dispatch_unsupported_keeps_name() {
    let err = dispatch("TypeScript", "let x = 1;").unwrap_err();
    assert!(matches!(&err, TranspileError::UnsupportedDialect { name } if name == "TypeScript"));
    assert!(err.to_string().contains("TypeScript"));
}

#[test]
fn test_malformed_output_call_fails_whole_request() {
    let err = dispatch("python", "x = 1\nprint(\"a\"\ny = 2").unwrap_err();
    assert!(matches!(err, TranspileError::MalformedOutputCall { .. }));
}
