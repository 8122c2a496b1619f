use crate::error::Error;
use crate::fmt::SUB_ROW;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext};
use crate::request::RouteInfo;

use super::add_trace_identifiers;

/// For foreground invocations: the request line, referrer, matched route
/// and any trace identifiers.
#[derive(Default)]
pub struct RequestPipe;

impl Pipe for RequestPipe {
    fn name(&self) -> &'static str {
        "request"
    }

    fn run(&mut self, ctx: &PipeContext<'_>, out: &mut ReportOutput) -> Result<(), Error> {
        if ctx.input.running_in_background {
            return Ok(());
        }
        let Some(request) = ctx.request else {
            return Ok(());
        };

        let request_line = format!("{} {}", request.method(), request.full_url());
        let referrer = request.referrer().filter(|referrer| !referrer.is_empty());

        {
            let table = out.reuse_table_or_new(true);
            match referrer {
                Some(referrer) => {
                    table.row("request", request_line);
                    table.row(format!("{SUB_ROW}referrer"), referrer);
                }
                None => {
                    table.row("request", format!("{request_line} (no referrer)"));
                }
            }

            match request.route() {
                Some(route) => add_route_rows(table, &route),
                None => {
                    table.row(format!("{SUB_ROW}route"), "(unavailable)");
                }
            }
        }

        add_trace_identifiers(ctx, out);

        Ok(())
    }
}

fn add_route_rows(table: &mut crate::output::Table, route: &RouteInfo) {
    let name = route.name.as_deref().unwrap_or("(unnamed)").to_string();

    let middleware = if route.middleware.is_empty() {
        "n/a".to_string()
    } else {
        route.middleware.join(", ")
    };

    // excluded middleware is only worth a row when something is excluded
    let excluded = (!route.excluded_middleware.is_empty())
        .then(|| route.excluded_middleware.join(", "));

    let action = route.action.as_deref().unwrap_or("n/a").to_string();

    table.row(format!("{SUB_ROW}route"), name);
    table.row(format!("{SUB_ROW}middleware"), middleware);
    table.row(format!("{SUB_ROW}excl. middleware"), excluded);
    table.row(format!("{SUB_ROW}action"), action);
}
