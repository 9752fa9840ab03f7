use std::fmt;
use std::path::Path;

use crate::metadata::ProblemMetadata;

/// How test input is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A single line typed by the user
    Typed,
    /// The full contents of a user-selected file
    File,
}

impl InputMode {
    /// Label shown when asking the user to pick a mode
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Typed => "Type test input",
            InputMode::File => "Load test input from a file",
        }
    }
}

/// Test input handed to the generated harness
///
/// Opaque at this layer: no trimming, normalization or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInput(String);

impl TestInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Read a whole file verbatim
    pub async fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        tokio::fs::read_to_string(path).await.map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for TestInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of one user-triggered run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The harness ran and produced output
    Completed {
        metadata: ProblemMetadata,
        input: TestInput,
        output: String,
    },

    /// The user declined to provide input; nothing was run
    Cancelled,
}

impl RunOutcome {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunOutcome::Cancelled)
    }
}
