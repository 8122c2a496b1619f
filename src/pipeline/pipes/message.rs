use crate::error::Error;
use crate::fmt::SUB_ROW;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};

/// Adds the caller's message, quoted, with the call site underneath.
#[derive(Default)]
pub struct MessagePipe;

impl Pipe for MessagePipe {
    fn name(&self) -> &'static str {
        "message"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        let Some(message) = ctx.input.message() else {
            return Ok(());
        };
        if message.is_empty() {
            return Ok(());
        }

        let location = ctx.input.caller_location.as_ref().map(|location| {
            location
                .render(&ctx.input.project_root, false)
                .trim_start_matches('/')
                .to_string()
        });

        let table = out.reuse_table_or_new(true);
        table.row("message", format!("\"{message}\""));
        table.row(format!("{SUB_ROW}location"), location);

        Ok(())
    }
}
