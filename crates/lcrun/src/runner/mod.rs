//! Local execution dispatcher
//!
//! [`Runner::execute`] maps a language tag to its handler, writes the harness
//! and input artifacts, runs the toolchain and always releases the artifacts
//! afterwards.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument};

pub use crate::runner::session::LocalRun;

mod compile;
mod execute;
mod session;

use crate::{
    artifacts::Artifacts,
    config::Config,
    language::Language,
    process::ProcessError,
    types::TestInput,
};

/// Result returned for C# instead of running anything
pub const CSHARP_NOT_IMPLEMENTED: &str =
    "C# local execution is not yet fully implemented. Submit the solution to test it remotely.";

/// Errors that occur during a local run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("no '@lc app=<app> id=<id> lang=<lang>' marker found in {}", .path.display())]
    MetadataMissing { path: PathBuf },

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("could not find a public class declaration in the Java source")]
    ClassNameNotFound,

    #[error(transparent)]
    Toolchain(#[from] ProcessError),

    #[error("failed to {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    pub(crate) fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let context = context.into();
        move |source| RunError::Io { context, source }
    }
}

/// Dispatcher for local runs
#[derive(Debug, Clone)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new runner with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a new runner with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run `file_content` (the text of `file_path`) against `input`
    ///
    /// Artifacts are created next to `file_path` and removed before this
    /// returns, on success and on failure.
    #[instrument(skip(self, input, file_content), fields(file = %file_path.display()))]
    pub async fn execute(
        &self,
        file_path: &Path,
        language: &str,
        input: &TestInput,
        file_content: &str,
    ) -> Result<String, RunError> {
        let language = Language::from_tag(language)?;
        debug!(%language, "dispatching");

        let file_path =
            std::path::absolute(file_path).map_err(RunError::io("resolve solution path"))?;
        let mut artifacts = Artifacts::beside(&file_path);
        let result = self
            .dispatch(language, &mut artifacts, input, file_content)
            .await;

        let removed = artifacts.release().await;
        debug!(removed, success = result.is_ok(), "run finished");

        result
    }

    async fn dispatch(
        &self,
        language: Language,
        artifacts: &mut Artifacts,
        input: &TestInput,
        source: &str,
    ) -> Result<String, RunError> {
        let toolchains = &self.config.toolchains;
        match language {
            Language::Python => execute::run_python(toolchains, artifacts, input, source).await,
            Language::JavaScript | Language::TypeScript => {
                execute::run_javascript(toolchains, language, artifacts, input, source).await
            }
            Language::Java => compile::run_java(toolchains, artifacts, input, source).await,
            Language::Cpp => compile::run_cpp(toolchains, artifacts, input, source).await,
            Language::Go => compile::run_go(toolchains, artifacts, input, source).await,
            Language::CSharp => {
                info!("C# is not runnable locally yet");
                Ok(CSHARP_NOT_IMPLEMENTED.to_owned())
            }
        }
    }
}

/// Write the harness and the input copy for `language`
async fn write_harness_and_input(
    language: Language,
    artifacts: &mut Artifacts,
    input: &TestInput,
    source: &str,
) -> Result<(PathBuf, PathBuf), RunError> {
    let harness = crate::harness::render(language, source)
        .ok_or_else(|| RunError::UnsupportedLanguage(language.name().to_owned()))?;

    let input_path = write_input(artifacts, input).await?;
    let harness_path = artifacts
        .write(language.extension(), harness.as_bytes())
        .await
        .map_err(RunError::io("write harness source"))?;
    debug!(harness = %harness_path.display(), input = %input_path.display(), "wrote harness");

    Ok((harness_path, input_path))
}

async fn write_input(artifacts: &mut Artifacts, input: &TestInput) -> Result<PathBuf, RunError> {
    artifacts
        .write("txt", input.as_bytes())
        .await
        .map_err(RunError::io("write test input"))
}
