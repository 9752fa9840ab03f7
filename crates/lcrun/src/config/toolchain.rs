use serde::{Deserialize, Deserializer, de};

use crate::config::ConfigError;

/// A toolchain command prefix (program followed by leading arguments)
///
/// `["g++", "-std=c++17"]` runs `g++ -std=c++17 <harness arguments...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainCommand(Vec<String>);

impl ToolchainCommand {
    pub fn new(
        command: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ConfigError> {
        let command: Vec<String> = command.into_iter().map(Into::into).collect();
        match command.first() {
            None => Err(ConfigError::Invalid("empty toolchain command".to_owned())),
            Some(program) if program.is_empty() => Err(ConfigError::Invalid(
                "toolchain command has an empty program".to_owned(),
            )),
            Some(_) => Ok(Self(command)),
        }
    }

    /// Build from a program name with no leading arguments
    pub fn program_only(program: &str) -> Self {
        Self(vec![program.to_owned()])
    }

    /// The program to spawn
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Arguments placed before the harness-specific arguments
    pub fn leading_args(&self) -> &[String] {
        &self.0[1..]
    }
}

impl<'de> Deserialize<'de> for ToolchainCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let command = Vec::<String>::deserialize(deserializer)?;
        ToolchainCommand::new(command).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for ToolchainCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// External toolchains used per language
#[derive(Debug, Clone, Deserialize)]
pub struct Toolchains {
    /// Python interpreter
    #[serde(default = "default_python")]
    pub python: ToolchainCommand,

    /// Python interpreter tried when `python` cannot be started
    #[serde(default = "default_python_fallback")]
    pub python_fallback: ToolchainCommand,

    /// JavaScript runtime, also used for TypeScript
    #[serde(default = "default_javascript")]
    pub javascript: ToolchainCommand,

    /// Java compiler
    #[serde(default = "default_javac")]
    pub javac: ToolchainCommand,

    /// Java launcher
    #[serde(default = "default_java")]
    pub java: ToolchainCommand,

    /// C++ compiler, also used for C
    #[serde(default = "default_cpp")]
    pub cpp: ToolchainCommand,

    /// Go toolchain
    #[serde(default = "default_go")]
    pub go: ToolchainCommand,
}

impl Default for Toolchains {
    fn default() -> Self {
        Self {
            python: default_python(),
            python_fallback: default_python_fallback(),
            javascript: default_javascript(),
            javac: default_javac(),
            java: default_java(),
            cpp: default_cpp(),
            go: default_go(),
        }
    }
}

fn default_python() -> ToolchainCommand {
    ToolchainCommand::program_only("python3")
}

fn default_python_fallback() -> ToolchainCommand {
    ToolchainCommand::program_only("python")
}

fn default_javascript() -> ToolchainCommand {
    ToolchainCommand::program_only("node")
}

fn default_javac() -> ToolchainCommand {
    ToolchainCommand::program_only("javac")
}

fn default_java() -> ToolchainCommand {
    ToolchainCommand::program_only("java")
}

fn default_cpp() -> ToolchainCommand {
    ToolchainCommand(vec![
        "g++".to_owned(),
        "-std=c++17".to_owned(),
        "-O2".to_owned(),
    ])
}

fn default_go() -> ToolchainCommand {
    ToolchainCommand::program_only("go")
}
