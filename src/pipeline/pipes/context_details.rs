use serde_json::Value;

use crate::context::{Annotation, DetailGroup, DetailOrder};
use crate::error::Error;
use crate::fmt::{NESTED, SUB_ROW};
use crate::fmt::value::nice_export;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};

/// Renders the structured context's frame-by-frame detail groups as a
/// `CONTEXT DETAILS:` block.
#[derive(Default)]
pub struct ContextDetailsPipe;

impl Pipe for ContextDetailsPipe {
    fn name(&self) -> &'static str {
        "context-details"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        let Some(context) = &ctx.input.structured_context else {
            return Ok(());
        };
        if !context.details_worth_listing() {
            return Ok(());
        }

        let order = if ctx.input.use_call_stack_order {
            DetailOrder::CallStack
        } else {
            DetailOrder::StackTrace
        };

        let descriptions: Vec<String> = context
            .detail_groups(order)
            .iter()
            .filter_map(|group| describe_group(group, &ctx.input.project_root))
            .collect();

        out.reuse_text_or_new(true)
            .line("CONTEXT DETAILS:")
            .blank_line()
            .lines(&descriptions.join("\n\n"));

        Ok(())
    }
}

/// One paragraph per group: the location line, then one line per
/// annotation. Groups with nothing to say are skipped, except that the
/// last application frame always shows its location.
fn describe_group(group: &DetailGroup, project_root: &str) -> Option<String> {
    let mut lines: Vec<String> = group
        .annotations
        .iter()
        .filter_map(describe_annotation)
        .filter(|line| !line.is_empty())
        .collect();

    let show_last = group.in_last_application_frame && !group.in_last_frame;
    if lines.is_empty() && !show_last {
        return None;
    }

    lines.insert(0, group.location.render(project_root, show_last));

    Some(lines.join("\n"))
}

fn describe_annotation(annotation: &Annotation) -> Option<String> {
    match annotation {
        Annotation::ExceptionThrown => Some(format!("{SUB_ROW}The exception was thrown")),
        Annotation::ExceptionCaught => {
            Some(format!("{SUB_ROW}The exception was caught (by the framework)"))
        }
        Annotation::Context(Value::String(text)) => Some(format!("{SUB_ROW}\"{text}\"")),
        Annotation::Context(value) => Some(nice_export(value, SUB_ROW, NESTED, NESTED)),
    }
}
