//! Runs against real interpreters and compilers found on PATH

use lcrun::{Runner, TestInput};

use crate::{fixture_source, install_fixture, listing};

const TWO_SUM_INPUT: &str = "[2,7,11,15], 9";
const PLACEHOLDER: &str =
    "Output: manual setup required (parsed input is not passed to the solution for this language)";

async fn run_real(fixture: &str, lang: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = install_fixture(dir.path(), fixture);
    let before = listing(dir.path());

    let output = Runner::with_defaults()
        .execute(
            &path,
            lang,
            &TestInput::new(TWO_SUM_INPUT),
            &fixture_source(fixture),
        )
        .await
        .unwrap_or_else(|e| panic!("{lang} run failed: {e}"));

    assert_eq!(listing(dir.path()), before);
    output
}

#[tokio::test]
async fn test_python_two_sum() {
    let output = run_real("1.two-sum.py", "python3").await;
    assert!(output.contains("Input: [2,7,11,15], 9"), "{output}");
    assert!(output.contains("Output: [0, 1]"), "{output}");
}

#[tokio::test]
async fn test_javascript_two_sum() {
    let output = run_real("1.two-sum.js", "javascript").await;
    assert!(output.contains("Output: [0,1]"), "{output}");
}

#[tokio::test]
async fn test_java_echoes_input() {
    let output = run_real("1.two-sum.java", "java").await;
    assert!(output.contains("Input: [2,7,11,15], 9"), "{output}");
    assert!(output.contains(PLACEHOLDER), "{output}");
}

#[tokio::test]
async fn test_cpp_echoes_input() {
    let output = run_real("1.two-sum.cpp", "cpp").await;
    assert!(output.contains("Input: [2,7,11,15], 9"), "{output}");
    assert!(output.contains(PLACEHOLDER), "{output}");
}

#[tokio::test]
async fn test_go_echoes_input() {
    let output = run_real("1.two-sum.go", "golang").await;
    assert!(output.contains("Input: [2,7,11,15], 9"), "{output}");
    assert!(output.contains(PLACEHOLDER), "{output}");
}

/// Run inline `source` saved as `file_name`
async fn run_source(file_name: &str, lang: &str, source: &str, input: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    std::fs::write(&path, source).unwrap();
    let before = listing(dir.path());

    let output = Runner::with_defaults()
        .execute(&path, lang, &TestInput::new(input), source)
        .await
        .unwrap_or_else(|e| panic!("{lang} run failed: {e}"));

    assert_eq!(listing(dir.path()), before);
    output
}

const PY_ECHO: &str = "\
class Solution:
    def echo(self, s):
        return repr(s)
";

#[tokio::test]
async fn test_python_non_json_input_is_one_raw_argument() {
    let output = run_source("echo.py", "python3", PY_ECHO, "hello world").await;
    assert!(output.contains("Output: 'hello world'"), "{output}");
}

#[tokio::test]
async fn test_python_empty_input_is_one_raw_argument() {
    let output = run_source("echo.py", "python3", PY_ECHO, "").await;
    assert!(output.contains("Output: ''"), "{output}");
}

#[tokio::test]
async fn test_python_multiline_input_parses_each_line() {
    let source = "\
class Solution:
    def shift(self, nums, k):
        return [n + k for n in nums]
";
    let output = run_source("shift.py", "python3", source, "[1,2,3]\n10\n").await;
    assert!(output.contains("Output: [11, 12, 13]"), "{output}");
}

#[tokio::test]
async fn test_python_calls_first_declared_public_method() {
    let source = "\
class Solution:
    def helper(self, x):
        return \"helper\"

    def solve(self, x):
        return \"solve\"
";
    let output = run_source("order.py", "python3", source, "1").await;
    assert!(output.contains("Output: helper"), "{output}");
}

#[tokio::test]
async fn test_python_skips_private_members() {
    let source = "\
class Solution:
    LIMIT = 100

    def _double(self, x):
        return x * 2

    def solve(self, x):
        return self._double(x)
";
    let output = run_source("private.py", "python3", source, "21").await;
    assert!(output.contains("Output: 42"), "{output}");
}

#[tokio::test]
async fn test_python_without_solution_class() {
    let source = "def solve(x):\n    return x\n";
    let output = run_source("plain.py", "python3", source, "1").await;
    assert!(
        output.contains("Output: no public method found on class Solution"),
        "{output}"
    );
}

#[tokio::test]
async fn test_javascript_class_uses_first_public_prototype_method() {
    let source = "\
class Solution {
  constructor() {
    this.calls = 0;
  }
  _check(nums) {
    return nums.length > 0;
  }
  pair(nums, k) {
    return [nums.length, k];
  }
}
";
    let output = run_source("pair.js", "javascript", source, "[1,2,3], 4").await;
    assert!(output.contains("Output: [3,4]"), "{output}");
}

const JS_SHOUT: &str = "var shout = function(s) {\n  return s.toUpperCase();\n};\n";

#[tokio::test]
async fn test_javascript_non_json_input_is_one_raw_argument() {
    let output = run_source("shout.js", "javascript", JS_SHOUT, "abc def").await;
    assert!(output.contains("Output: \"ABC DEF\""), "{output}");
}

#[tokio::test]
async fn test_javascript_empty_input_is_one_raw_argument() {
    let output = run_source("shout.js", "javascript", JS_SHOUT, "").await;
    assert!(output.contains("Output: \"\""), "{output}");
}

#[tokio::test]
async fn test_javascript_multiline_input_parses_each_line() {
    let source = "function total(nums, k) {\n  return nums.reduce((a, b) => a + b, k);\n}\n";
    let output = run_source("total.js", "javascript", source, "[1,2,3]\n10").await;
    assert!(output.contains("Output: 16"), "{output}");
}
