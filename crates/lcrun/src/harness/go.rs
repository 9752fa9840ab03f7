//! Go harness: echoes the input and prints the manual-setup placeholder
//!
//! Solution files usually have no package clause. Any clause present is
//! dropped and the harness declares `package main` itself, followed by
//! aliased imports so they cannot clash with the solution's own.

use std::sync::LazyLock;

use regex::Regex;

use crate::harness::MANUAL_SETUP_OUTPUT;

static PACKAGE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*package[ \t]+[A-Za-z_][A-Za-z0-9_]*[ \t]*;?[ \t]*\r?$")
        .expect("package pattern should compile")
});

const PRELUDE: &str = "\
package main

import (
\tlcrunfmt \"fmt\"
\tlcrunos \"os\"
)

";

/// Render the Go harness around `source`
pub fn render(source: &str) -> String {
    let body = PACKAGE_CLAUSE.replace(source, "");
    format!(
        r#"{PRELUDE}{body}

func main() {{
	raw, err := lcrunos.ReadFile(lcrunos.Args[1])
	if err != nil {{
		lcrunfmt.Fprintln(lcrunos.Stderr, err)
		lcrunos.Exit(1)
	}}
	lcrunfmt.Println("Input: " + string(raw))
	lcrunfmt.Println("Output: {MANUAL_SETUP_OUTPUT}")
}}
"#
    )
}
