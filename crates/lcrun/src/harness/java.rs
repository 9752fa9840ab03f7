//! Java harness: echoes the input and prints the manual-setup placeholder
//!
//! The harness is written as `<PublicClass>.java` so that `javac` accepts the
//! embedded public class; the driver lives in a separate package-private
//! class [`MAIN_CLASS`].

use crate::harness::MANUAL_SETUP_OUTPUT;

/// Class holding the harness `main`
pub const MAIN_CLASS: &str = "LcRunMain";

/// Render the Java harness around `source`
pub fn render(source: &str) -> String {
    format!(
        r#"import java.util.*;

{source}

class {MAIN_CLASS} {{
    public static void main(String[] args) throws Exception {{
        String input = new String(
            java.nio.file.Files.readAllBytes(java.nio.file.Paths.get(args[0])),
            java.nio.charset.StandardCharsets.UTF_8);
        System.out.println("Input: " + input);
        System.out.println("Output: {MANUAL_SETUP_OUTPUT}");
    }}
}}
"#
    )
}
