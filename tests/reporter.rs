//! End-to-end tests through the fluent reporter.

use std::sync::Arc;

use clearlog::{
    CaughtException, ContextSource, Error, Level, MemorySink, Principal, Reporter, RequestFacts,
    RouteInfo, StaticConfig, StructuredContext,
};

fn config() -> StaticConfig {
    StaticConfig {
        channels: vec!["app".to_string()],
        ..StaticConfig::default()
    }
}

fn reporter_with_sink(config: StaticConfig) -> (Reporter, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(config)
        .sink_shared(sink.clone())
        .build();
    (reporter, sink)
}

#[test]
fn a_message_report_reaches_the_sink() {
    let (reporter, sink) = reporter_with_sink(config());

    reporter.report().info("user signed up").unwrap();

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].channel, "app");
    assert_eq!(entries[0].level, Level::Info);
    assert!(entries[0].message.starts_with("CUSTOM MESSAGE:"));
    assert!(entries[0].message.contains("\"user signed up\""));
}

#[test]
fn the_call_site_is_recorded_as_the_location() {
    let (reporter, sink) = reporter_with_sink(config());

    reporter.report().info("hi").unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.contains("- location"));
    assert!(message.contains("tests/reporter.rs on line"));
}

#[test]
fn reports_fan_out_to_every_default_channel() {
    let (reporter, sink) = reporter_with_sink(StaticConfig {
        channels: vec!["app".to_string(), "slack".to_string()],
        ..StaticConfig::default()
    });

    reporter.report().warning("heads up").unwrap();

    let channels: Vec<String> = sink.entries().iter().map(|e| e.channel.clone()).collect();
    assert_eq!(channels, vec!["app".to_string(), "slack".to_string()]);
}

#[test]
fn an_explicit_channel_overrides_the_defaults() {
    let (reporter, sink) = reporter_with_sink(config());

    reporter.channel("ops").error("disk failing").unwrap();

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].channel, "ops");
}

#[test]
fn log_uses_the_configured_default_levels() {
    let (reporter, sink) = reporter_with_sink(config());

    reporter.report().log("plain message").unwrap();
    reporter
        .report()
        .log(CaughtException::new("x::Error", "boom"))
        .unwrap();

    let entries = sink.entries();
    assert_eq!(entries[0].level, Level::Info);
    assert_eq!(entries[1].level, Level::Error);
}

#[test]
fn an_explicit_level_wins_over_the_defaults() {
    let (reporter, sink) = reporter_with_sink(config());

    reporter.level(Level::Critical).log("meltdown").unwrap();

    assert_eq!(sink.entries()[0].level, Level::Critical);
}

#[test]
fn a_misconfigured_default_level_aborts_the_report() {
    let mut config = config();
    config.levels.message = "loud".to_string();
    let (reporter, sink) = reporter_with_sink(config);

    let err = reporter.report().log("hi").unwrap_err();

    assert_eq!(err, Error::InvalidLevel("loud".to_string()));
    assert!(sink.entries().is_empty());
}

#[test]
fn an_unknown_renderer_aborts_the_report() {
    let mut config = config();
    config.renderers.default = "xml".to_string();
    let (reporter, sink) = reporter_with_sink(config);

    let err = reporter.report().info("hi").unwrap_err();

    assert_eq!(err, Error::UnknownRenderer("xml".to_string()));
    assert!(sink.entries().is_empty());
}

#[test]
fn exception_reports_render_the_chain() {
    let (reporter, sink) = reporter_with_sink(config());

    let exception = CaughtException::new("db::ConnectError", "connection refused")
        .caused_by(CaughtException::new("io::Error", "timed out"));
    reporter.report().error(exception).unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.starts_with("EXCEPTION (CAUGHT):"));
    assert!(message.contains("db::ConnectError: \"connection refused\""));
    assert!(message.contains("prev-ex."));
}

#[test]
fn caller_context_is_attached_to_the_report() {
    let (reporter, sink) = reporter_with_sink(config());

    reporter
        .report()
        .context("order-id", 1234)
        .context("step", "capture")
        .info("payment retried")
        .unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.contains("order-id = 1234"));
    assert!(message.contains("step = 'capture'"));
}

#[test]
fn every_report_gets_a_date_time_row() {
    let (reporter, sink) = reporter_with_sink(config());

    reporter.report().info("hi").unwrap();

    assert!(sink.entries()[0].message.contains("date/time"));
}

struct FixedContext {
    channels: Vec<String>,
    level: Option<Level>,
    known: Vec<String>,
}

impl StructuredContext for FixedContext {
    fn known_issues(&self) -> Vec<String> {
        self.known.clone()
    }

    fn channels(&self) -> Vec<String> {
        self.channels.clone()
    }

    fn level(&self) -> Option<Level> {
        self.level
    }
}

struct FixedContextSource;

impl ContextSource for FixedContextSource {
    fn for_exception(&self, _exception: &CaughtException) -> Option<Box<dyn StructuredContext>> {
        self.current()
    }

    fn current(&self) -> Option<Box<dyn StructuredContext>> {
        Some(Box::new(FixedContext {
            channels: vec!["ctx-chan".to_string()],
            level: Some(Level::Alert),
            known: vec!["issue #1".to_string()],
        }))
    }
}

#[test]
fn the_structured_context_supplies_channel_level_and_known_issues() {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(config())
        .sink_shared(sink.clone())
        .context_source(FixedContextSource)
        .build();

    reporter.report().log("hi").unwrap();

    let entries = sink.entries();
    assert_eq!(entries[0].channel, "ctx-chan");
    assert_eq!(entries[0].level, Level::Alert);
    assert!(entries[0].message.contains("known"));
    assert!(entries[0].message.contains("issue #1"));
}

#[test]
fn explicit_choices_beat_the_structured_context() {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(config())
        .sink_shared(sink.clone())
        .context_source(FixedContextSource)
        .build();

    reporter.channel("ops").warning("hi").unwrap();

    let entries = sink.entries();
    assert_eq!(entries[0].channel, "ops");
    assert_eq!(entries[0].level, Level::Warning);
}

struct FakeRequest {
    principal: Result<Option<Principal>, Error>,
    route: Option<RouteInfo>,
}

impl FakeRequest {
    fn guest() -> Self {
        Self {
            principal: Ok(None),
            route: None,
        }
    }
}

impl RequestFacts for FakeRequest {
    fn method(&self) -> String {
        "GET".to_string()
    }

    fn full_url(&self) -> String {
        "https://example.com/checkout".to_string()
    }

    fn referrer(&self) -> Option<String> {
        None
    }

    fn route(&self) -> Option<RouteInfo> {
        self.route.clone()
    }

    fn client_ip(&self) -> String {
        "10.0.0.1".to_string()
    }

    fn user_agent(&self) -> Option<String> {
        Some("TestUA/1.0".to_string())
    }

    fn principal(&self) -> Result<Option<Principal>, Error> {
        self.principal.clone()
    }
}

#[test]
fn foreground_reports_describe_the_request_and_user() {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(config())
        .sink_shared(sink.clone())
        .request(FakeRequest::guest())
        .build();

    reporter.report().info("hi").unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.contains("GET https://example.com/checkout (no referrer)"));
    assert!(message.contains("- route"));
    assert!(message.contains("(unavailable)"));
    assert!(message.contains("(guest) (10.0.0.1)"));
    assert!(message.contains("- agent"));
    assert!(message.contains("TestUA/1.0"));
}

#[test]
fn matched_routes_render_their_details() {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(config())
        .sink_shared(sink.clone())
        .request(FakeRequest {
            principal: Ok(Some(Principal {
                id: "7".to_string(),
                name: "Jo".to_string(),
                email: "jo@example.com".to_string(),
            })),
            route: Some(RouteInfo {
                name: Some("checkout.show".to_string()),
                middleware: vec!["web".to_string(), "auth".to_string()],
                excluded_middleware: Vec::new(),
                action: None,
            }),
        })
        .build();

    reporter.report().info("hi").unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.contains("checkout.show"));
    assert!(message.contains("web, auth"));
    assert!(!message.contains("excl. middleware"));
    assert!(message.contains("- action"));
    assert!(message.contains("7 - Jo - jo@example.com (10.0.0.1)"));
}

#[test]
fn a_failing_principal_lookup_degrades_and_gets_reported() {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(config())
        .sink_shared(sink.clone())
        .request(FakeRequest {
            principal: Err(Error::pipe("user", "session store offline")),
            route: None,
        })
        .build();

    reporter.report().info("hi").unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.contains("(10.0.0.1)"));
    assert!(!message.contains("(guest)"));
    assert!(message.contains("- agent"));
    assert!(message.contains("EXCEPTION (that occurred when building the report)"));
    assert!(message.contains("session store offline"));
}

#[test]
fn background_reports_describe_the_command_instead_of_the_request() {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(
            config().background_command_from_args(["worker", "--queue", "mail"]),
        )
        .sink_shared(sink.clone())
        .request(FakeRequest::guest())
        .build();

    reporter.report().info("hi").unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.contains("command"));
    assert!(message.contains("worker --queue mail"));
    assert!(!message.contains("GET https://example.com"));
    assert!(!message.contains("agent"));
}

struct TracedContext;

impl StructuredContext for TracedContext {
    fn trace_identifiers(&self) -> Vec<(String, String)> {
        vec![
            ("request-id".to_string(), "abc-123".to_string()),
            (String::new(), "xyz-789".to_string()),
        ]
    }
}

struct TracedContextSource;

impl ContextSource for TracedContextSource {
    fn for_exception(&self, _exception: &CaughtException) -> Option<Box<dyn StructuredContext>> {
        self.current()
    }

    fn current(&self) -> Option<Box<dyn StructuredContext>> {
        Some(Box::new(TracedContext))
    }
}

#[test]
fn trace_identifiers_are_listed_with_the_request() {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::builder()
        .config(config())
        .sink_shared(sink.clone())
        .context_source(TracedContextSource)
        .request(FakeRequest::guest())
        .build();

    reporter.report().info("hi").unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.contains("- trace-ids"));
    assert!(message.contains("request-id: abc-123"));
    // a nameless identifier renders as the id alone
    assert!(message.contains("xyz-789"));
}

#[test]
fn the_prefix_template_wraps_the_whole_report() {
    let sink = Arc::new(MemorySink::new());
    let mut config = config();
    config.prefix = "%LEVEL%> ".to_string();
    let reporter = Reporter::builder()
        .config(config)
        .sink_shared(sink.clone())
        .build();

    reporter.report().error("hi").unwrap();

    let message = &sink.entries()[0].message;
    assert!(message.starts_with("\n\nERROR>\n"));
    assert!(message.ends_with("\nERROR>\n"));
    assert!(message.contains("ERROR> CUSTOM MESSAGE:"));
}
