//! Python harness: calls the first public method of `Solution`

const PRELUDE: &str = "\
import json
import sys
from typing import *

";

const DRIVER: &str = r#"

def _lcrun_parse_args(raw):
    text = raw.strip()
    if not text:
        return [raw]
    try:
        return json.loads("[" + text + "]")
    except ValueError:
        pass
    lines = [line for line in text.splitlines() if line.strip()]
    if len(lines) > 1:
        try:
            return [json.loads(line) for line in lines]
        except ValueError:
            pass
    return [raw]


def _lcrun_entry():
    solution_type = globals().get("Solution")
    if not isinstance(solution_type, type):
        return None
    for name, member in vars(solution_type).items():
        if not name.startswith("_") and callable(member):
            return getattr(solution_type(), name)
    return None


def _lcrun_main():
    with open(sys.argv[1], encoding="utf-8") as handle:
        raw = handle.read()
    print("Input:", raw)
    args = _lcrun_parse_args(raw)
    entry = _lcrun_entry()
    if entry is None:
        print("Output: no public method found on class Solution")
        return
    print("Output:", entry(*args))


if __name__ == "__main__":
    _lcrun_main()
"#;

/// Render the Python harness around `source`
pub fn render(source: &str) -> String {
    format!("{PRELUDE}{source}\n{DRIVER}")
}
