//! Readable diagnostic reports for errors and noteworthy events.
//!
//! A report call renders its subject (a plain message or a captured
//! exception chain) into an aligned, human-readable block, enriched with
//! whatever the environment can contribute: the request or command being
//! handled, the user, the time in each configured timezone, caller context
//! and structured-context annotations. The rendered string then goes to a
//! pluggable log sink, once per resolved channel.
//!
//! ```
//! use clearlog::{Level, Reporter};
//!
//! # fn main() -> Result<(), clearlog::Error> {
//! let reporter = Reporter::builder().build();
//!
//! reporter
//!     .report()
//!     .context("order-id", 1234)
//!     .warning("payment gateway timed out, retrying")?;
//!
//! reporter.channel("ops").level(Level::Critical).log("disk nearly full")?;
//! # Ok(())
//! # }
//! ```
//!
//! Rendering is best-effort by design: a failing assembly step never aborts
//! the report, it gets rendered into the report instead.

#![forbid(unsafe_code)]

pub mod config;
pub mod context;
mod error;
pub mod exception;
pub mod fmt;
mod input;
mod level;
pub mod output;
pub mod pipeline;
pub mod render;
mod reporter;
pub mod request;
pub mod sink;

pub use config::{ConfigProvider, StaticConfig};
pub use context::{Annotation, ContextSource, DetailGroup, DetailOrder, StructuredContext};
pub use error::Error;
pub use exception::{CaughtException, FrameLocation};
pub use input::{InputBuilder, ReportInput, Subject};
pub use level::Level;
pub use output::{Data, Fragment, ReportOutput, RowContent, Table, TableSlot, Text, TextSlot};
pub use render::{Renderer, RendererRegistry, TextRenderer};
pub use reporter::{ReportBuilder, Reporter, ReporterBuilder};
pub use request::{Principal, ReportingProbe, RequestFacts, RouteInfo};
pub use sink::{LogEntry, LogSink, MemorySink, StderrSink};
