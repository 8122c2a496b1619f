//! The two-pass pipe pipeline.
//!
//! A renderer assembles its report by sending a shared output accumulator
//! through a sequence of pipes. Every pipe gets a `run` pass first; once all
//! runs have happened, each pipe is told whether the whole pass succeeded so
//! it can finish fragments it reserved earlier. A failing pipe never aborts
//! the pass — its error is collected and rendered into the report itself.

pub mod pipes;

use crate::error::Error;
use crate::input::ReportInput;
use crate::output::ReportOutput;
use crate::request::{ReportingProbe, RequestFacts};

/// Read-only collaborators handed to every pipe call.
pub struct PipeContext<'a> {
    pub input: &'a ReportInput,
    pub request: Option<&'a dyn RequestFacts>,
    pub probe: Option<&'a dyn ReportingProbe>,
}

impl PipeContext<'_> {
    /// Without a probe there is no way to tell, and an orderly report call
    /// is the common case.
    #[must_use]
    pub fn exception_was_caught(&self) -> bool {
        self.probe.is_none_or(ReportingProbe::is_reporting)
    }
}

/// One step of the report assembly.
pub trait Pipe {
    /// Stable name, used to attribute failures.
    fn name(&self) -> &'static str;

    /// First pass: contribute fragments, or reserve them for later.
    ///
    /// # Errors
    /// Anything; the pipeline records the error and carries on.
    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error>;

    /// Second pass when every `run` succeeded.
    ///
    /// # Errors
    /// Anything; recorded like a `run` failure.
    fn on_success(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        let _ = (ctx, out);
        Ok(())
    }

    /// Second pass when at least one `run` failed. `errors` holds every
    /// failure collected so far, in encounter order.
    ///
    /// # Errors
    /// Anything; a failure here is recorded but there is no third pass.
    fn on_failure(
        &mut self,
        ctx: &PipeContext<'_>,
        out: &mut ReportOutput,
        errors: &[Error],
    ) -> Result<(), Error> {
        let _ = (ctx, out, errors);
        Ok(())
    }
}

/// Runs pipes in order and keeps every error they raise.
#[derive(Default)]
pub struct Pipeline {
    pipes: Vec<Box<dyn Pipe>>,
    errors: Vec<Error>,
}

impl Pipeline {
    #[must_use]
    pub fn through(pipes: Vec<Box<dyn Pipe>>) -> Self {
        Self {
            pipes,
            errors: Vec::new(),
        }
    }

    /// First pass over every pipe. A pipe failure is recorded, isolated, and
    /// the remaining pipes still run.
    pub fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) {
        for pipe in &mut self.pipes {
            if let Err(e) = pipe.run(ctx, out) {
                self.errors.push(attribute(pipe.name(), e));
            }
        }
    }

    /// Second pass after a clean first pass.
    pub fn notify_success(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) {
        for pipe in &mut self.pipes {
            if let Err(e) = pipe.on_success(ctx, out) {
                self.errors.push(attribute(pipe.name(), e));
            }
        }
    }

    /// Second pass after a first pass with failures.
    pub fn notify_failure(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput, errors: &[Error]) {
        for pipe in &mut self.pipes {
            if let Err(e) = pipe.on_failure(ctx, out, errors) {
                self.errors.push(attribute(pipe.name(), e));
            }
        }
    }

    /// Every failure collected so far, in encounter order.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

/// Tags an error with the pipe it came from, unless it already carries one.
fn attribute(pipe: &'static str, error: Error) -> Error {
    match error {
        Error::Pipe { .. } => error,
        other => Error::pipe(pipe, other.to_string()),
    }
}
