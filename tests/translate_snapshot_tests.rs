//! Golden snapshot tests for generated C++
//!
//! Each test translates a small multi-line program and compares the whole
//! output against an inline snapshot, so skeleton or rule changes show up
//! as reviewed diffs.
//!
//! Run with: `cargo test --test translate_snapshot_tests`
//! Review changes: `cargo insta review`

use cppify::{dispatch, translate_java_like, translate_javascript_like, translate_python_like};

#[test]
fn test_python_program() {
    let source = r#"
# greet the user
name = "Ada"
print("Hello, {}!".format(name))
if name == "Ada":
    print(name)
"#;
    let cpp = translate_python_like(source).expect("translation failed");
    insta::assert_snapshot!(cpp, @r#"
#include <iostream>
#include <string>
using namespace std;
int main() {
    // greet the user
    auto name = "Ada";
    cout << "Hello, {}!" + name << endl;
    if name == "Ada":;
    cout << name << endl;
    return 0;
}
"#);
}

#[test]
fn test_javascript_program() {
    let source = r#"
// totals
let total = 0;
const step = 2;
total = total + step;
console.log("total: " + total);
"#;
    let cpp = translate_javascript_like(source).expect("translation failed");
    insta::assert_snapshot!(cpp, @r#"
#include <iostream>
#include <string>
using namespace std;
int main() {
    // totals
    auto total = 0;;
    auto step = 2;;
    total = total + step;;
    cout << "total: " + total << endl;
    return 0;
}
"#);
}

#[test]
fn test_java_program() {
    let source = r#"
// counters
int count = 3;
double ratio = 0.5;
String label = "n";
System.out.println(label + count);
count++;
"#;
    let cpp = translate_java_like(source).expect("translation failed");
    insta::assert_snapshot!(cpp, @r#"
#include <iostream>
#include <string>
using namespace std;
    // counters
    int count = 3;;
    double ratio = 0.5;;
    String label = "n";;
    cout << label + count << endl;
    count++;;
    return 0;
}
"#);
}

#[test]
fn test_empty_sources() {
    insta::assert_snapshot!(dispatch("python", "").expect("translation failed"), @r"
#include <iostream>
#include <string>
using namespace std;
int main() {
    return 0;
}
");
    insta::assert_snapshot!(dispatch("java", "").expect("translation failed"), @r"
#include <iostream>
#include <string>
using namespace std;
    return 0;
}
");
}
