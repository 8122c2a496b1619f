//! The immutable snapshot one render pass works from, and the builder that
//! produces one snapshot per resolved channel.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::config::ConfigProvider;
use crate::context::StructuredContext;
use crate::error::Error;
use crate::exception::{CaughtException, FrameLocation};
use crate::level::Level;

/// What is being reported. The type makes "both a message and an exception"
/// (and "neither") unrepresentable.
#[derive(Debug, Clone)]
pub enum Subject {
    Message(String),
    Exception(CaughtException),
}

impl From<&str> for Subject {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for Subject {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<CaughtException> for Subject {
    fn from(exception: CaughtException) -> Self {
        Self::Exception(exception)
    }
}

/// Everything a render pass needs, resolved up front. One per channel per
/// report event; shared read-only by every pipe in the pass.
#[derive(Clone)]
pub struct ReportInput {
    pub project_root: String,
    pub running_in_background: bool,
    pub background_command: Option<String>,
    pub default_renderer: String,
    pub channel_renderers: HashMap<String, String>,
    pub timezones: Vec<String>,
    pub datetime_format: Vec<String>,
    /// Prefix template; `%level%`/`%LEVEL%` substituted at post-process time.
    pub prefix: String,
    pub use_call_stack_order: bool,
    pub channel: String,
    pub level: Level,
    pub subject: Subject,
    /// Where the caller invoked the reporter from.
    pub caller_location: Option<FrameLocation>,
    pub caller_context: Map<String, Value>,
    /// Shared between the per-channel inputs of one report event.
    pub structured_context: Option<Arc<dyn StructuredContext>>,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl ReportInput {
    /// Per-channel override wins; everything else uses the default renderer.
    #[must_use]
    pub fn resolve_renderer(&self, channel: &str) -> &str {
        self.channel_renderers
            .get(channel)
            .map_or(self.default_renderer.as_str(), String::as_str)
    }

    #[must_use]
    pub const fn exception(&self) -> Option<&CaughtException> {
        match &self.subject {
            Subject::Exception(exception) => Some(exception),
            Subject::Message(_) => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.subject {
            Subject::Message(message) => Some(message.as_str()),
            Subject::Exception(_) => None,
        }
    }
}

/// Resolves channels and level against the config and structured context,
/// then snapshots one [`ReportInput`] per channel.
pub struct InputBuilder {
    pub channel: Option<String>,
    pub level: Option<Level>,
    pub subject: Subject,
    pub caller_location: Option<FrameLocation>,
    pub caller_context: Map<String, Value>,
    pub structured_context: Option<Arc<dyn StructuredContext>>,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl InputBuilder {
    /// # Errors
    /// `InvalidLevel` when a config-supplied default level string isn't one
    /// of the eight recognised names.
    pub fn build(self, config: &dyn ConfigProvider) -> Result<Vec<ReportInput>, Error> {
        let channels = self.resolve_channels(config);
        let level = self.resolve_level(config)?;

        let running_in_background = config.running_in_background();
        let background_command = if running_in_background {
            config.background_command()
        } else {
            None
        };

        let inputs = channels
            .into_iter()
            .map(|channel| ReportInput {
                project_root: config.project_root(),
                running_in_background,
                background_command: background_command.clone(),
                default_renderer: config.default_renderer(),
                channel_renderers: config.renderer_overrides(),
                timezones: config.timezones(),
                datetime_format: config.datetime_format(),
                prefix: config.prefix(),
                use_call_stack_order: config.use_call_stack_order(),
                channel,
                level,
                subject: self.subject.clone(),
                caller_location: self.caller_location.clone(),
                caller_context: self.caller_context.clone(),
                structured_context: self.structured_context.clone(),
                occurred_at: self.occurred_at,
            })
            .collect();

        Ok(inputs)
    }

    /// Explicit channel wins; then the structured context's preference;
    /// then the config's default list (fan-out: one input per channel).
    fn resolve_channels(&self, config: &dyn ConfigProvider) -> Vec<String> {
        if let Some(channel) = &self.channel {
            if !channel.is_empty() {
                return vec![channel.clone()];
            }
        }

        if let Some(context) = &self.structured_context {
            let channels = context.channels();
            if !channels.is_empty() {
                return channels;
            }
        }

        config.default_channels()
    }

    /// Explicit level wins; then the structured context's preference; then
    /// the config default matching the subject kind.
    fn resolve_level(&self, config: &dyn ConfigProvider) -> Result<Level, Error> {
        if let Some(level) = self.level {
            return Ok(level);
        }

        if let Some(context) = &self.structured_context {
            if let Some(level) = context.level() {
                return Ok(level);
            }
        }

        match &self.subject {
            Subject::Exception(_) => config.default_exception_level().parse(),
            Subject::Message(_) => config.default_message_level().parse(),
        }
    }
}
