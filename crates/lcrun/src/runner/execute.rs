//! Interpreted languages
//!
//! Python and JavaScript/TypeScript harnesses call the solution directly, so
//! a single interpreter invocation produces the final output.

use tracing::{instrument, warn};

use crate::artifacts::Artifacts;
use crate::config::Toolchains;
use crate::language::Language;
use crate::process::ToolCommand;
use crate::runner::{RunError, write_harness_and_input};
use crate::types::TestInput;

/// Run the Python harness, falling back to the secondary interpreter only
/// when the primary one cannot be started
#[instrument(skip_all)]
pub(super) async fn run_python(
    toolchains: &Toolchains,
    artifacts: &mut Artifacts,
    input: &TestInput,
    source: &str,
) -> Result<String, RunError> {
    let (harness, input_path) =
        write_harness_and_input(Language::Python, artifacts, input, source).await?;

    let primary = ToolCommand::toolchain(&toolchains.python)
        .arg(&harness)
        .arg(&input_path)
        .current_dir(artifacts.dir());

    match primary.run().await {
        Err(err) if err.is_start_failure() => {
            warn!(
                primary = %toolchains.python,
                fallback = %toolchains.python_fallback,
                error = %err,
                "python interpreter failed to start, trying fallback"
            );
            let output = ToolCommand::toolchain(&toolchains.python_fallback)
                .arg(&harness)
                .arg(&input_path)
                .current_dir(artifacts.dir())
                .run()
                .await?;
            Ok(output)
        }
        result => Ok(result?),
    }
}

/// Run the JavaScript or TypeScript harness with the JavaScript runtime
#[instrument(skip_all, fields(%language))]
pub(super) async fn run_javascript(
    toolchains: &Toolchains,
    language: Language,
    artifacts: &mut Artifacts,
    input: &TestInput,
    source: &str,
) -> Result<String, RunError> {
    let (harness, input_path) = write_harness_and_input(language, artifacts, input, source).await?;

    let output = ToolCommand::toolchain(&toolchains.javascript)
        .arg(&harness)
        .arg(&input_path)
        .current_dir(artifacts.dir())
        .run()
        .await?;
    Ok(output)
}
