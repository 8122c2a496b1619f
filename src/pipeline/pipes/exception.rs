use crate::error::Error;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};

/// Adds the reported exception chain to the shared table.
#[derive(Default)]
pub struct ExceptionPipe;

impl Pipe for ExceptionPipe {
    fn name(&self) -> &'static str {
        "exception"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        let Some(exception) = ctx.input.exception() else {
            return Ok(());
        };

        let table = out.reuse_table_or_new(true);
        exception.render_to_table(table, &ctx.input.project_root, None);

        Ok(())
    }
}
