use crate::error::Error;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};

/// Lists known issues the structured context associates with the subject.
#[derive(Default)]
pub struct KnownIssuesPipe;

impl Pipe for KnownIssuesPipe {
    fn name(&self) -> &'static str {
        "known-issues"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        let Some(context) = &ctx.input.structured_context else {
            return Ok(());
        };

        let issues = context.known_issues();
        if issues.is_empty() {
            return Ok(());
        }

        out.reuse_table_or_new(true).row("known", issues.join("\n"));

        Ok(())
    }
}
