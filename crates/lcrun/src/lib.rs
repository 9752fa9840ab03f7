//! A library for running saved coding-problem solutions locally.
//!
//! lcrun reads a solution file, extracts its `@lc app=.. id=.. lang=..`
//! marker line, wraps the source in a small per-language harness, runs the
//! matching toolchain against ad-hoc test input and reports the output.
//!
//! # Features
//!
//! - **Marker extraction** — one fixed pattern, no parsing of the solution.
//! - **Closed language dispatch** — Python, JavaScript/TypeScript, Java, C/C++, Go; C# is recognized but not run.
//! - **Argument binding** — Python and JavaScript harnesses call the solution with the parsed input.
//! - **Guaranteed cleanup** — every temporary artifact is removed on success and failure.
//! - **No shell** — toolchains are spawned with explicit argument vectors.
//! - **TOML configuration** — toolchain command prefixes and inline-action shortcuts.

pub use artifacts::Artifacts;
pub use config::{Config, ConfigError, EXAMPLE_CONFIG, ToolchainCommand, Toolchains};
pub use language::Language;
pub use metadata::ProblemMetadata;
pub use output::OutputLog;
pub use process::{ProcessError, ToolCommand};
pub use runner::{CSHARP_NOT_IMPLEMENTED, LocalRun, RunError, Runner};
pub use types::{InputMode, RunOutcome, TestInput};

pub mod artifacts;
pub mod config;
pub mod harness;
pub mod language;
pub mod metadata;
pub mod output;
pub mod process;
pub mod runner;
pub mod types;
