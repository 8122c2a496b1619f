use crate::error::Error;
use crate::output::{ReportOutput, TextSlot};
use crate::pipeline::{Pipe, PipeContext};

/// Writes the report's banner line.
///
/// The banner depends on whether the rest of the pass succeeds, so `run`
/// only reserves the spot and the notification pass fills it in.
#[derive(Default)]
pub struct TitlePipe {
    slot: Option<TextSlot>,
}

impl TitlePipe {
    fn write_banner(
        &mut self,
        ctx: &PipeContext<'_>,
        out: &mut ReportOutput,
        pass_failed: bool,
    ) {
        let Some(slot) = self.slot else {
            return;
        };
        let Some(text) = out.text_at(slot) else {
            return;
        };

        if ctx.input.exception().is_none() {
            text.line("CUSTOM MESSAGE:");
            return;
        }

        let prefix = if pass_failed { "ORIGINAL " } else { "" };
        let outcome = if ctx.exception_was_caught() {
            "CAUGHT"
        } else {
            "UNCAUGHT"
        };
        text.line(format!("{prefix}EXCEPTION ({outcome}):"));
    }
}

impl Pipe for TitlePipe {
    fn name(&self) -> &'static str {
        "title"
    }

    fn run(&mut self, _ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        self.slot = Some(out.reserve_text());
        Ok(())
    }

    fn on_success(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        self.write_banner(ctx, out, false);
        Ok(())
    }

    fn on_failure(
        &mut self,
        ctx: &PipeContext<'_>,
        out: &mut ReportOutput,
        _errors: &[Error],
    ) -> Result<(), Error> {
        self.write_banner(ctx, out, true);
        Ok(())
    }
}
