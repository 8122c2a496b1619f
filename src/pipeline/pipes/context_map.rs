use serde_json::Value;

use crate::error::Error;
use crate::output::{ReportOutput, RowContent};
use crate::pipeline::{Pipe, PipeContext};

/// Adds the key/value context the caller attached to this one report.
#[derive(Default)]
pub struct ContextMapPipe;

impl Pipe for ContextMapPipe {
    fn name(&self) -> &'static str {
        "context-map"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        if ctx.input.caller_context.is_empty() {
            return Ok(());
        }

        out.reuse_table_or_new(true).row(
            "context",
            RowContent::Tree(Value::Object(ctx.input.caller_context.clone())),
        );

        Ok(())
    }
}
