use serde::Deserialize;
use thiserror::Error;

pub use crate::config::toolchain::{ToolchainCommand, Toolchains};

mod loader;
pub mod toolchain;

/// Example configuration embedded at compile time.
///
/// Library users can access this to generate a starter config file.
pub const EXAMPLE_CONFIG: &str = include_str!("../../lcrun.example.toml");

/// Inline actions an editor integration may show on a problem file
pub const KNOWN_SHORTCUTS: [&str; 6] = [
    "submit",
    "test",
    "run-locally",
    "solution",
    "description",
    "star",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Config for lcrun
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name of the output channel shown in the result banner
    #[serde(default = "default_output_channel")]
    pub output_channel: String,

    /// Inline actions shown on a problem file. Purely presentational; only
    /// reported, never acted on by the runner.
    #[serde(default = "default_shortcuts")]
    pub shortcuts: Vec<String>,

    /// External toolchain commands
    #[serde(default)]
    pub toolchains: Toolchains,
}

impl Config {
    /// Create a new config from the embedded example
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the run-locally action is shown on problem files
    pub fn shows_run_locally(&self) -> bool {
        self.shortcuts.iter().any(|s| s == "run-locally")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_toml(EXAMPLE_CONFIG).expect("embedded default config should be valid")
    }
}

fn default_output_channel() -> String {
    "LeetCode Local Run".to_owned()
}

fn default_shortcuts() -> Vec<String> {
    vec!["submit".to_owned(), "test".to_owned()]
}
