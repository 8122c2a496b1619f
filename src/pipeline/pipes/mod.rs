//! The individual report-assembly steps, in the order the text renderer
//! runs them.

mod command;
mod context_details;
mod context_map;
mod exception;
mod internal_errors;
mod known_issues;
mod message;
mod occurred_at;
mod request;
mod title;
mod user;

pub use command::CommandPipe;
pub use context_details::ContextDetailsPipe;
pub use context_map::ContextMapPipe;
pub use exception::ExceptionPipe;
pub use internal_errors::InternalErrorsPipe;
pub use known_issues::KnownIssuesPipe;
pub use message::MessagePipe;
pub use occurred_at::OccurredAtPipe;
pub use request::RequestPipe;
pub use title::TitlePipe;
pub use user::UserPipe;

use crate::fmt::SUB_ROW;
use crate::output::ReportOutput;
use crate::pipeline::PipeContext;

/// Adds the structured context's trace identifiers as a `- trace-id` /
/// `- trace-ids` row. Shared by the command and request pipes.
fn add_trace_identifiers(ctx: &PipeContext<'_>, out: &mut ReportOutput) {
    let Some(context) = &ctx.input.structured_context else {
        return;
    };

    let identifiers: Vec<String> = context
        .trace_identifiers()
        .into_iter()
        .map(|(name, id)| {
            if name.is_empty() {
                id
            } else {
                format!("{name}: {id}")
            }
        })
        .collect();

    if identifiers.is_empty() {
        return;
    }

    let title = if identifiers.len() == 1 {
        "trace-id"
    } else {
        "trace-ids"
    };
    out.reuse_table_or_new(true)
        .row(format!("{SUB_ROW}{title}"), identifiers.join("\n"));
}
