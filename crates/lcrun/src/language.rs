//! Supported solution languages
//!
//! Dispatch is a closed set: every tag that can be run locally maps to one
//! [`Language`] variant, and each variant owns its harness template and
//! toolchain strategy.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::runner::RunError;

static JAVA_PUBLIC_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*public[ \t]+(?:(?:final|abstract|static|sealed|strictfp)[ \t]+)*(?:class|interface|enum|record)[ \t]+([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .expect("java class pattern should compile")
});

/// Languages that can be run locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// `python`, `python3`
    Python,
    /// `javascript`
    JavaScript,
    /// `typescript`
    TypeScript,
    /// `java`
    Java,
    /// `cpp`, `c` (both built with the C++ toolchain)
    Cpp,
    /// `golang`
    Go,
    /// `csharp` (recognized but not runnable yet)
    CSharp,
}

impl Language {
    /// All variants, in display order
    pub const ALL: [Language; 7] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Java,
        Language::Cpp,
        Language::Go,
        Language::CSharp,
    ];

    /// Map a marker-line language tag to a variant
    pub fn from_tag(tag: &str) -> Result<Self, RunError> {
        match tag {
            "python" | "python3" => Ok(Language::Python),
            "javascript" => Ok(Language::JavaScript),
            "typescript" => Ok(Language::TypeScript),
            "java" => Ok(Language::Java),
            "cpp" | "c" => Ok(Language::Cpp),
            "golang" => Ok(Language::Go),
            "csharp" => Ok(Language::CSharp),
            other => Err(RunError::UnsupportedLanguage(other.to_owned())),
        }
    }

    /// Marker-line tags accepted for this variant
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["python", "python3"],
            Language::JavaScript => &["javascript"],
            Language::TypeScript => &["typescript"],
            Language::Java => &["java"],
            Language::Cpp => &["cpp", "c"],
            Language::Go => &["golang"],
            Language::CSharp => &["csharp"],
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::Cpp => "C/C++",
            Language::Go => "Go",
            Language::CSharp => "C#",
        }
    }

    /// Extension of the generated harness source, without dot
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::CSharp => "cs",
        }
    }

    /// Whether the harness needs a separate build step before running
    pub fn is_compiled(&self) -> bool {
        matches!(self, Language::Java | Language::Cpp)
    }

    /// Whether the harness calls the solution method with parsed arguments
    pub fn binds_arguments(&self) -> bool {
        matches!(
            self,
            Language::Python | Language::JavaScript | Language::TypeScript
        )
    }
}

impl FromStr for Language {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Find the identifier of the first public type declared in Java source
pub fn java_class_name(source: &str) -> Option<String> {
    JAVA_PUBLIC_TYPE
        .captures(source)
        .map(|captures| captures[1].to_owned())
}
