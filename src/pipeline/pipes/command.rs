use crate::error::Error;
use crate::fmt::SUB_ROW;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};

use super::add_trace_identifiers;

/// For background invocations: the command line, the OS user, and any trace
/// identifiers.
#[derive(Default)]
pub struct CommandPipe;

impl Pipe for CommandPipe {
    fn name(&self) -> &'static str {
        "command"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        if !ctx.input.running_in_background {
            return Ok(());
        }

        let command = ctx
            .input
            .background_command
            .as_deref()
            .filter(|command| !command.is_empty())
            .unwrap_or("(unknown)")
            .to_string();

        let table = out.reuse_table_or_new(true);
        table.row("command", command);
        table.row(format!("{SUB_ROW}user"), current_os_user());

        add_trace_identifiers(ctx, out);

        Ok(())
    }
}

fn current_os_user() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|user| !user.is_empty())
}
