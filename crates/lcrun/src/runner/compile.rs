//! Compiled languages
//!
//! Java and C++ build the harness first and then run the result; Go builds
//! and runs in one `go run` step. None of them bind the parsed input to the
//! solution method.

use tracing::{debug, instrument};

use crate::artifacts::Artifacts;
use crate::config::Toolchains;
use crate::harness;
use crate::language::{Language, java_class_name};
use crate::process::ToolCommand;
use crate::runner::{RunError, write_harness_and_input, write_input};
use crate::types::TestInput;

/// Extension of native executables produced by the C++ toolchain
const BINARY_EXTENSION: &str = if cfg!(windows) { "exe" } else { "" };

/// Compile the Java harness into its own build directory and run it
#[instrument(skip_all)]
pub(super) async fn run_java(
    toolchains: &Toolchains,
    artifacts: &mut Artifacts,
    input: &TestInput,
    source: &str,
) -> Result<String, RunError> {
    // Checked before anything touches the disk
    let class_name = java_class_name(source).ok_or(RunError::ClassNameNotFound)?;
    debug!(class_name = %class_name, "found public class");

    let input_path = write_input(artifacts, input).await?;
    let build_dir = artifacts
        .create_dir()
        .await
        .map_err(RunError::io("create Java build directory"))?;
    let harness_path = build_dir.join(format!("{class_name}.java"));
    tokio::fs::write(&harness_path, harness::java::render(source))
        .await
        .map_err(RunError::io("write harness source"))?;

    ToolCommand::toolchain(&toolchains.javac)
        .arg("-d")
        .arg(&build_dir)
        .arg(&harness_path)
        .current_dir(artifacts.dir())
        .run()
        .await?;
    debug!("javac finished");

    let output = ToolCommand::toolchain(&toolchains.java)
        .arg("-cp")
        .arg(&build_dir)
        .arg(harness::java::MAIN_CLASS)
        .arg(&input_path)
        .current_dir(artifacts.dir())
        .run()
        .await?;
    Ok(output)
}

/// Compile the C++ harness to a temporary binary and run it
#[instrument(skip_all)]
pub(super) async fn run_cpp(
    toolchains: &Toolchains,
    artifacts: &mut Artifacts,
    input: &TestInput,
    source: &str,
) -> Result<String, RunError> {
    let (harness, input_path) =
        write_harness_and_input(Language::Cpp, artifacts, input, source).await?;
    let binary = artifacts
        .reserve(BINARY_EXTENSION)
        .map_err(RunError::io("name compiled binary"))?;

    ToolCommand::toolchain(&toolchains.cpp)
        .arg(&harness)
        .arg("-o")
        .arg(&binary)
        .current_dir(artifacts.dir())
        .run()
        .await?;
    debug!(binary = %binary.display(), "compiled");

    let output = ToolCommand::new(&binary)
        .arg(&input_path)
        .current_dir(artifacts.dir())
        .run()
        .await?;
    Ok(output)
}

/// Build and run the Go harness with `go run`
#[instrument(skip_all)]
pub(super) async fn run_go(
    toolchains: &Toolchains,
    artifacts: &mut Artifacts,
    input: &TestInput,
    source: &str,
) -> Result<String, RunError> {
    let (harness, input_path) =
        write_harness_and_input(Language::Go, artifacts, input, source).await?;

    let output = ToolCommand::toolchain(&toolchains.go)
        .arg("run")
        .arg(&harness)
        .arg(&input_path)
        .current_dir(artifacts.dir())
        .run()
        .await?;
    Ok(output)
}
