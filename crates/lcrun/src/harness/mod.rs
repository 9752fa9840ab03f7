//! Harness generation
//!
//! A harness is the solution source embedded in a larger program that reads
//! the test-input file named by its first argument, echoes it, and either
//! calls the solution (Python, JavaScript, TypeScript) or prints a fixed
//! placeholder (Java, C++, Go).

use crate::language::Language;

pub mod cpp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;

/// Printed after `Output:` by harnesses that do not bind arguments
pub const MANUAL_SETUP_OUTPUT: &str =
    "manual setup required (parsed input is not passed to the solution for this language)";

/// Render the harness for `language`, or `None` if the language has no harness
pub fn render(language: Language, source: &str) -> Option<String> {
    match language {
        Language::Python => Some(python::render(source)),
        Language::JavaScript | Language::TypeScript => Some(javascript::render(source)),
        Language::Java => Some(java::render(source)),
        Language::Cpp => Some(cpp::render(source)),
        Language::Go => Some(go::render(source)),
        Language::CSharp => None,
    }
}
