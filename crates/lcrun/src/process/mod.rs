//! Child-process execution
//!
//! Every external toolchain is spawned through [`ToolCommand`], which passes
//! an explicit argument vector (no shell), captures stdout and stderr as the
//! process runs, and maps the exit status to a result string or a
//! [`ProcessError`].

use thiserror::Error;

pub use crate::process::command::ToolCommand;

mod command;

/// Errors that occur while running an external tool
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(
        "failed to start '{program}': {source}. Check that it is installed and available on PATH"
    )]
    StartFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed with exit code {code}: {stderr}")]
    Failed { code: i32, stderr: String },

    #[error("I/O error while running '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Whether the process never started (missing or non-executable program)
    pub fn is_start_failure(&self) -> bool {
        matches!(self, ProcessError::StartFailed { .. })
    }

    /// Exit code of a process that ran and failed
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Failed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
