//! Command builder for external toolchains

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, instrument, trace};

use crate::config::ToolchainCommand;
use crate::process::ProcessError;

/// Size of the buffer used when draining child output
const READ_CHUNK: usize = 8192;

/// Builder for a single toolchain invocation
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// Create a command for a bare program
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Create a command from a configured toolchain prefix
    pub fn toolchain(toolchain: &ToolchainCommand) -> Self {
        Self::new(toolchain.program()).args(toolchain.leading_args())
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Append multiple arguments
    pub fn args(mut self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> Self {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Set the working directory of the child
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// The program that will be spawned
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments passed to the program
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Working directory, if set
    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Run to completion
    ///
    /// Resolves with stdout, or stderr if stdout was empty, when the process
    /// exits with code 0.
    #[instrument(skip(self), fields(program = %self.program.to_string_lossy()))]
    pub async fn run(self) -> Result<String, ProcessError> {
        let program = self.program.to_string_lossy().into_owned();
        debug!(args = ?self.args, cwd = ?self.current_dir, "spawning process");

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(ref dir) = self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| ProcessError::StartFailed {
            program: program.clone(),
            source,
        })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let io_error = |source| ProcessError::Io {
            program: program.clone(),
            source,
        };
        let (stdout, stderr, status) =
            tokio::try_join!(drain(stdout, "stdout"), drain(stderr, "stderr"), child.wait())
                .map_err(io_error)?;

        let stdout = String::from_utf8_lossy(&stdout).into_owned();
        let stderr = String::from_utf8_lossy(&stderr).into_owned();

        debug!(
            exit_code = ?status.code(),
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "process exited"
        );

        if !status.success() {
            return Err(ProcessError::Failed {
                code: status.code().unwrap_or(-1),
                stderr,
            });
        }

        if stdout.is_empty() {
            Ok(stderr)
        } else {
            Ok(stdout)
        }
    }
}

/// Read a child stream chunk by chunk until EOF
async fn drain<R>(stream: Option<R>, name: &'static str) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut captured = Vec::new();
    let Some(mut stream) = stream else {
        return Ok(captured);
    };

    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        trace!(stream = name, bytes = n, "captured output chunk");
        captured.extend_from_slice(&chunk[..n]);
    }

    Ok(captured)
}
