//! The fluent entry point: wires the collaborators together and turns one
//! `report()` call into rendered sink writes.

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::config::{ConfigProvider, StaticConfig};
use crate::context::ContextSource;
use crate::error::Error;
use crate::exception::FrameLocation;
use crate::input::{InputBuilder, Subject};
use crate::level::Level;
use crate::pipeline::PipeContext;
use crate::render::{Renderer, RendererRegistry};
use crate::request::{ReportingProbe, RequestFacts};
use crate::sink::{LogSink, StderrSink};

/// Renders and logs diagnostic reports. Collaborators are injected once at
/// construction; every report call works against that fixed set.
pub struct Reporter {
    config: Arc<dyn ConfigProvider>,
    renderers: RendererRegistry,
    sink: Arc<dyn LogSink>,
    context_source: Option<Arc<dyn ContextSource>>,
    request: Option<Arc<dyn RequestFacts>>,
    probe: Option<Arc<dyn ReportingProbe>>,
}

impl Reporter {
    #[must_use]
    pub fn builder() -> ReporterBuilder {
        ReporterBuilder::default()
    }

    /// Starts a fluent report.
    #[must_use]
    pub fn report(&self) -> ReportBuilder<'_> {
        ReportBuilder {
            reporter: self,
            channel: None,
            level: None,
            context: Map::new(),
        }
    }

    /// Shorthand for `report().channel(..)`.
    #[must_use]
    pub fn channel(&self, channel: impl Into<String>) -> ReportBuilder<'_> {
        self.report().channel(channel)
    }

    /// Shorthand for `report().level(..)`.
    #[must_use]
    pub fn level(&self, level: Level) -> ReportBuilder<'_> {
        self.report().level(level)
    }
}

/// Assembles a [`Reporter`]. Only the collaborators that exist in the host
/// environment need to be supplied; config defaults to [`StaticConfig`]'s
/// defaults and the sink to stderr.
pub struct ReporterBuilder {
    config: Arc<dyn ConfigProvider>,
    renderers: RendererRegistry,
    sink: Arc<dyn LogSink>,
    context_source: Option<Arc<dyn ContextSource>>,
    request: Option<Arc<dyn RequestFacts>>,
    probe: Option<Arc<dyn ReportingProbe>>,
}

impl Default for ReporterBuilder {
    fn default() -> Self {
        Self {
            config: Arc::new(StaticConfig::default()),
            renderers: RendererRegistry::new(),
            sink: Arc::new(StderrSink),
            context_source: None,
            request: None,
            probe: None,
        }
    }
}

impl ReporterBuilder {
    #[must_use]
    pub fn config(mut self, config: impl ConfigProvider + 'static) -> Self {
        self.config = Arc::new(config);
        self
    }

    #[must_use]
    pub fn config_shared(mut self, config: Arc<dyn ConfigProvider>) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Shared-handle variant, for sinks the caller wants to inspect later.
    #[must_use]
    pub fn sink_shared(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn context_source(mut self, source: impl ContextSource + 'static) -> Self {
        self.context_source = Some(Arc::new(source));
        self
    }

    #[must_use]
    pub fn request(mut self, request: impl RequestFacts + 'static) -> Self {
        self.request = Some(Arc::new(request));
        self
    }

    #[must_use]
    pub fn probe(mut self, probe: impl ReportingProbe + 'static) -> Self {
        self.probe = Some(Arc::new(probe));
        self
    }

    /// Registers an additional renderer id.
    #[must_use]
    pub fn renderer(mut self, id: impl Into<String>, factory: fn() -> Box<dyn Renderer>) -> Self {
        self.renderers.register(id, factory);
        self
    }

    #[must_use]
    pub fn build(self) -> Reporter {
        Reporter {
            config: self.config,
            renderers: self.renderers,
            sink: self.sink,
            context_source: self.context_source,
            request: self.request,
            probe: self.probe,
        }
    }
}

/// One in-flight report. Channel, level and context are optional; the
/// terminal call supplies the subject and fires the report.
pub struct ReportBuilder<'a> {
    reporter: &'a Reporter,
    channel: Option<String>,
    level: Option<Level>,
    context: Map<String, Value>,
}

macro_rules! level_terminal {
    ($(#[$doc:meta])* $name:ident => $level:ident) => {
        $(#[$doc])*
        /// # Errors
        /// Configuration errors abort the report; pipe failures do not.
        #[track_caller]
        pub fn $name(self, subject: impl Into<Subject>) -> Result<(), Error> {
            let caller = Location::caller();
            self.dispatch(Some(Level::$level), subject.into(), caller)
        }
    };
}

impl ReportBuilder<'_> {
    /// Targets one specific channel instead of the configured defaults.
    #[must_use]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Attaches one key/value pair of caller context.
    #[must_use]
    pub fn context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a whole context map; keys merge over earlier ones.
    #[must_use]
    pub fn context_map(mut self, context: Map<String, Value>) -> Self {
        self.context.extend(context);
        self
    }

    level_terminal!(/// Reports at `debug` level.
        debug => Debug);
    level_terminal!(/// Reports at `info` level.
        info => Info);
    level_terminal!(/// Reports at `notice` level.
        notice => Notice);
    level_terminal!(/// Reports at `warning` level.
        warning => Warning);
    level_terminal!(/// Reports at `error` level.
        error => Error);
    level_terminal!(/// Reports at `critical` level.
        critical => Critical);
    level_terminal!(/// Reports at `alert` level.
        alert => Alert);
    level_terminal!(/// Reports at `emergency` level.
        emergency => Emergency);

    /// Reports at whatever level resolution picks (explicit `level(..)`,
    /// then the structured context, then the config defaults).
    ///
    /// # Errors
    /// Configuration errors abort the report; pipe failures do not.
    #[track_caller]
    pub fn log(self, subject: impl Into<Subject>) -> Result<(), Error> {
        let caller = Location::caller();
        let level = self.level;
        self.dispatch(level, subject.into(), caller)
    }

    fn dispatch(
        self,
        level: Option<Level>,
        subject: Subject,
        caller: &'static Location<'static>,
    ) -> Result<(), Error> {
        let reporter = self.reporter;

        let caller_location = FrameLocation::new(caller.file(), caller.line());

        // the context's own channel/level records are kept consistent with
        // what actually gets logged
        let structured_context = reporter.context_source.as_ref().and_then(|source| {
            let mut context = match &subject {
                Subject::Exception(exception) => source.for_exception(exception),
                Subject::Message(_) => source.current(),
            }?;
            if let Some(channel) = &self.channel {
                context.set_channels(std::slice::from_ref(channel));
            }
            if let Some(level) = level {
                context.set_level(level);
            }
            Some(Arc::from(context))
        });

        let inputs = InputBuilder {
            channel: self.channel,
            level,
            subject,
            caller_location: Some(caller_location),
            caller_context: self.context,
            structured_context,
            occurred_at: Some(Utc::now()),
        }
        .build(reporter.config.as_ref())?;

        for input in inputs {
            let renderer_id = input.resolve_renderer(&input.channel).to_string();
            let renderer = reporter.renderers.resolve(&renderer_id)?;

            let ctx = PipeContext {
                input: &input,
                request: reporter.request.as_deref(),
                probe: reporter.probe.as_deref(),
            };

            let rendered = renderer.render(&ctx);
            reporter.sink.write(&input.channel, input.level, &rendered);
        }

        Ok(())
    }
}
