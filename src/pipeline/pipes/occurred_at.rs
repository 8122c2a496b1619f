use crate::error::Error;
use crate::fmt::timestamp;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};

/// Adds the moment the report subject occurred, rendered once per
/// configured timezone with the columns aligned.
#[derive(Default)]
pub struct OccurredAtPipe;

impl Pipe for OccurredAtPipe {
    fn name(&self) -> &'static str {
        "occurred-at"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        let Some(occurred_at) = ctx.input.occurred_at else {
            return Ok(());
        };

        let rendered = timestamp::render_instant(
            occurred_at,
            &ctx.input.datetime_format,
            &ctx.input.timezones,
        )?;

        out.reuse_table_or_new(true).row("date/time", rendered);

        Ok(())
    }
}
