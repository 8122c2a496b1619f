//! Renderers turn one report input into the final string handed to the
//! sink, and the registry resolves them from config-supplied ids.

mod text;

pub use text::TextRenderer;

use std::collections::HashMap;

use crate::error::Error;
use crate::fmt;
use crate::output::ReportOutput;
use crate::pipeline::{Pipe, PipeContext, Pipeline};

/// A report format. Implementations pick the pipes; the orchestration of
/// the two passes and the post-processing are shared.
pub trait Renderer {
    /// The assembly steps, in execution order.
    fn pipes(&self) -> Vec<Box<dyn Pipe>>;

    /// Runs the full assembly: first pass, outcome notification, fragment
    /// merge, then prefixing. Pipe failures end up inside the report rather
    /// than aborting it.
    fn render(&self, ctx: &PipeContext<'_>) -> String {
        let mut out = ReportOutput::new();
        let mut pipeline = Pipeline::through(self.pipes());

        pipeline.run(ctx, &mut out);

        let first_pass_errors = pipeline.errors().to_vec();
        if first_pass_errors.is_empty() {
            pipeline.notify_success(ctx, &mut out);
        } else {
            pipeline.notify_failure(ctx, &mut out, &first_pass_errors);
        }

        let body = out.combined().unwrap_or_default();

        post_process(&ctx.input.prefix, ctx.input.level, &body)
    }
}

/// Substitutes the level placeholders into the prefix template, then wraps
/// the body in the prefixed block layout.
fn post_process(prefix_template: &str, level: crate::level::Level, body: &str) -> String {
    let prefix = prefix_template
        .replace("%level%", level.as_str())
        .replace("%LEVEL%", level.as_upper_str());
    apply_prefix(&prefix, body)
}

/// An empty prefix leaves the body untouched. A non-empty prefix pads the
/// report with blank lines above and below and prefixes every line,
/// blank lines getting the right-trimmed prefix.
#[must_use]
pub fn apply_prefix(prefix: &str, body: &str) -> String {
    if prefix.is_empty() {
        return body.to_string();
    }
    format!("\n\n{}\n", fmt::prefix::add(prefix, &format!("\n{body}\n")))
}

/// Maps renderer ids from configuration to renderer factories.
pub struct RendererRegistry {
    factories: HashMap<String, fn() -> Box<dyn Renderer>>,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("text", || Box::new(TextRenderer));
        registry
    }
}

impl RendererRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the factory behind an id.
    pub fn register(&mut self, id: impl Into<String>, factory: fn() -> Box<dyn Renderer>) {
        self.factories.insert(id.into(), factory);
    }

    /// # Errors
    /// `UnknownRenderer` when no factory is registered under the id.
    pub fn resolve(&self, id: &str) -> Result<Box<dyn Renderer>, Error> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownRenderer(id.to_string()))
    }
}
