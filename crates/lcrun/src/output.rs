//! Output channel
//!
//! An append-only, named text log. A finished run appends either one result
//! block or one error line, never both.

use std::fmt::Display;
use std::io::{self, Write};

use crate::metadata::ProblemMetadata;
use crate::types::{RunOutcome, TestInput};

/// Named append-only log over any writer
#[derive(Debug)]
pub struct OutputLog<W: Write> {
    name: String,
    sink: W,
}

impl<W: Write> OutputLog<W> {
    pub fn new(name: impl Into<String>, sink: W) -> Self {
        Self {
            name: name.into(),
            sink,
        }
    }

    /// Channel name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a single line
    pub fn append_line(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.sink, "{line}")?;
        self.sink.flush()
    }

    /// Append the block for a successful run
    pub fn append_result(
        &mut self,
        metadata: &ProblemMetadata,
        input: &TestInput,
        output: &str,
    ) -> io::Result<()> {
        writeln!(
            self.sink,
            "[{}] Running problem {} ({}) locally",
            self.name, metadata.id, metadata.lang
        )?;
        writeln!(self.sink, "Input:")?;
        writeln!(self.sink, "{}", input.as_str().trim_end_matches('\n'))?;
        writeln!(self.sink, "Result:")?;
        writeln!(self.sink, "{}", output.trim_end_matches('\n'))?;
        writeln!(self.sink)?;
        self.sink.flush()
    }

    /// Append the line for a failed run
    pub fn append_error(&mut self, error: impl Display) -> io::Result<()> {
        writeln!(self.sink, "[{}] Error: {error}", self.name)?;
        self.sink.flush()
    }

    /// Record the outcome of a run; cancelled runs leave no trace
    pub fn record<E: Display>(&mut self, outcome: &Result<RunOutcome, E>) -> io::Result<()> {
        match outcome {
            Ok(RunOutcome::Completed {
                metadata,
                input,
                output,
            }) => self.append_result(metadata, input, output),
            Ok(RunOutcome::Cancelled) => Ok(()),
            Err(error) => self.append_error(error),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.sink
    }
}
