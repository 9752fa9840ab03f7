//! A single user-triggered run of a solution file

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::metadata::{self, ProblemMetadata};
use crate::runner::{RunError, Runner};
use crate::types::{RunOutcome, TestInput};

/// A solution file whose marker line has been read
///
/// Loading happens before the user is asked for input, so a file without a
/// marker fails early and nothing is written to disk.
#[derive(Debug, Clone)]
pub struct LocalRun {
    path: PathBuf,
    content: String,
    metadata: ProblemMetadata,
}

impl LocalRun {
    /// Read `path` and extract its marker line
    #[instrument]
    pub async fn load(path: &Path) -> Result<Self, RunError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(RunError::io(format!("read {}", path.display())))?;
        Self::from_content(path, content)
    }

    /// Build from already-read file content
    pub fn from_content(path: impl Into<PathBuf>, content: String) -> Result<Self, RunError> {
        let path = path.into();
        let metadata = metadata::extract(&content).ok_or_else(|| RunError::MetadataMissing {
            path: path.clone(),
        })?;
        debug!(app = %metadata.app, id = %metadata.id, lang = %metadata.lang, "found marker");
        Ok(Self {
            path,
            content,
            metadata,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn metadata(&self) -> &ProblemMetadata {
        &self.metadata
    }

    /// Run the file against `input`
    ///
    /// `None` means the user declined to provide input: the run is cancelled
    /// without spawning anything.
    pub async fn execute(
        &self,
        runner: &Runner,
        input: Option<TestInput>,
    ) -> Result<RunOutcome, RunError> {
        let Some(input) = input else {
            debug!("no input provided, run cancelled");
            return Ok(RunOutcome::Cancelled);
        };

        let output = runner
            .execute(&self.path, &self.metadata.lang, &input, &self.content)
            .await?;

        Ok(RunOutcome::Completed {
            metadata: self.metadata.clone(),
            input,
            output,
        })
    }
}
