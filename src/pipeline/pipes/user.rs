use crate::error::Error;
use crate::fmt::SUB_ROW;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};

/// For foreground invocations: who made the request.
///
/// Principal lookup is allowed to fail; the pipe then records the client IP
/// alone and re-raises the failure so it shows up in the internal-errors
/// block. The user-agent row is added either way.
#[derive(Default)]
pub struct UserPipe;

impl Pipe for UserPipe {
    fn name(&self) -> &'static str {
        "user"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        if ctx.input.running_in_background {
            return Ok(());
        }
        let Some(request) = ctx.request else {
            return Ok(());
        };

        let ip = request.client_ip();

        let outcome = match request.principal() {
            Ok(principal) => {
                let who = principal.map_or_else(
                    || "(guest)".to_string(),
                    |principal| format!("{} - {} - {}", principal.id, principal.name, principal.email),
                );
                out.reuse_table_or_new(true).row("user", format!("{who} ({ip})"));
                Ok(())
            }
            Err(e) => {
                out.reuse_table_or_new(true).row("user", format!("({ip})"));
                Err(e)
            }
        };

        out.reuse_table_or_new(true)
            .row(format!("{SUB_ROW}agent"), request.user_agent());

        outcome
    }
}
