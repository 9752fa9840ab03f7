//! JavaScript/TypeScript harness
//!
//! Calls the first public prototype method of a `Solution` class when one
//! exists, otherwise the first top-level function declared in the source.

use std::sync::LazyLock;

use regex::Regex;

static TOP_LEVEL_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)^[ \t]*(?:export[ \t]+)?(?:async[ \t]+)?function\*?[ \t]*([A-Za-z_$][\w$]*)[ \t]*[(<]",
        r"|^[ \t]*(?:export[ \t]+)?(?:var|let|const)[ \t]+([A-Za-z_$][\w$]*)[ \t]*(?::[^=\n]*)?=[ \t]*(?:async[ \t]+)?(?:function\b|\(|[A-Za-z_$][\w$]*[ \t]*=>)",
    ))
    .expect("function pattern should compile")
});

const PRELUDE: &str = "const _lcrunFs = require(\"fs\");\n\n";

const PARSE: &str = r#"

function _lcrunParseArgs(raw) {
  const text = raw.trim();
  if (text === "") {
    return [raw];
  }
  try {
    return JSON.parse("[" + text + "]");
  } catch (_) {}
  const lines = text.split(/\r?\n/).filter((line) => line.trim() !== "");
  if (lines.length > 1) {
    try {
      return lines.map((line) => JSON.parse(line));
    } catch (_) {}
  }
  return [raw];
}

function _lcrunEntry() {
  if (typeof Solution === "function" && Solution.prototype) {
    const instance = new Solution();
    const name = Object.getOwnPropertyNames(Solution.prototype).find(
      (key) => key !== "constructor" && !key.startsWith("_") && typeof instance[key] === "function"
    );
    if (name) {
      return instance[name].bind(instance);
    }
  }
"#;

const MAIN: &str = r#"  return null;
}

(function _lcrunMain() {
  const raw = _lcrunFs.readFileSync(process.argv[2], "utf8");
  console.log("Input: " + raw);
  const entry = _lcrunEntry();
  if (!entry) {
    console.log("Output: no solution function found");
    return;
  }
  const result = entry(..._lcrunParseArgs(raw));
  console.log("Output: " + JSON.stringify(result));
})();
"#;

/// Name of the first public top-level function declared in `source`
pub fn first_function(source: &str) -> Option<String> {
    TOP_LEVEL_FUNCTION
        .captures_iter(source)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|name| name.as_str())
        .find(|name| !name.starts_with('_'))
        .map(str::to_owned)
}

/// Render the JavaScript harness around `source`
pub fn render(source: &str) -> String {
    let fallback = match first_function(source) {
        Some(name) => format!(
            "  if (typeof {name} === \"function\") {{\n    return {name};\n  }}\n"
        ),
        None => String::new(),
    };
    format!("{PRELUDE}{source}\n{PARSE}{fallback}{MAIN}")
}
