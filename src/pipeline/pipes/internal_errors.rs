use crate::error::Error;
use crate::exception::CaughtException;
use crate::output::{ReportOutput, TableSlot, TextSlot};
use crate::pipeline::{Pipe, PipeContext};

/// Renders the errors that occurred while the report itself was being built.
///
/// Reserves a header and a table during `run`; both stay empty unless the
/// pass fails, in which case every collected error is listed.
#[derive(Default)]
pub struct InternalErrorsPipe {
    header: Option<TextSlot>,
    table: Option<TableSlot>,
}

impl Pipe for InternalErrorsPipe {
    fn name(&self) -> &'static str {
        "internal-errors"
    }

    fn run(&mut self, _ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        self.header = Some(out.reserve_text());
        self.table = Some(out.reserve_table());
        Ok(())
    }

    fn on_failure(
        &mut self,
        ctx: &PipeContext<'_>,
        out: &mut ReportOutput,
        errors: &[Error],
    ) -> Result<(), Error> {
        let (Some(header), Some(table)) = (self.header, self.table) else {
            return Ok(());
        };

        // "NEW" distinguishes these from the exception being reported
        let new = if ctx.input.exception().is_some() {
            "NEW "
        } else {
            ""
        };
        let plural = if errors.len() == 1 { "" } else { "S" };
        if let Some(text) = out.text_at(header) {
            text.line(format!(
                "{new}EXCEPTION{plural} (that occurred when building the report)"
            ));
        }

        if let Some(table) = out.table_at(table) {
            for (i, error) in errors.iter().enumerate() {
                if i > 0 {
                    table.blank_row();
                }
                let number = (errors.len() > 1).then_some(i + 1);
                CaughtException::new("", error.to_string()).render_to_table(
                    table,
                    &ctx.input.project_root,
                    number,
                );
            }
        }

        Ok(())
    }
}
