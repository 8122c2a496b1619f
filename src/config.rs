//! Configuration: the provider interface the core consumes, and a plain
//! TOML-backed implementation of it.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Everything the input builder needs to know about the environment.
///
/// Level defaults come back as strings and are validated when inputs are
/// built, so a misconfigured level aborts the report attempt rather than
/// being silently replaced.
pub trait ConfigProvider: Send + Sync {
    /// Project root directory, used to shorten file paths.
    fn project_root(&self) -> String;

    /// Whether the process is a background/CLI invocation rather than a
    /// request handler.
    fn running_in_background(&self) -> bool;

    /// The command line of the background invocation, when known.
    fn background_command(&self) -> Option<String>;

    /// Channels to fan out to when neither the caller nor the structured
    /// context picked any.
    fn default_channels(&self) -> Vec<String>;

    fn default_exception_level(&self) -> String;

    fn default_message_level(&self) -> String;

    /// Per-channel renderer ids, overriding the default renderer.
    fn renderer_overrides(&self) -> HashMap<String, String>;

    fn default_renderer(&self) -> String;

    /// Timezones the occurred-at instant is rendered in, in order.
    fn timezones(&self) -> Vec<String>;

    /// chrono format parts, column-aligned across timezones when rendered.
    fn datetime_format(&self) -> Vec<String>;

    /// Per-line prefix template; `%level%` and `%LEVEL%` are substituted.
    fn prefix(&self) -> String;

    /// Order context detail groups oldest-first (call-stack order) instead
    /// of most-recent-first (stack-trace order).
    fn use_call_stack_order(&self) -> bool;
}

/// Renderer selection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderersConfig {
    /// Renderer id used when a channel has no override.
    pub default: String,
    /// Channel name to renderer id.
    pub channels: HashMap<String, String>,
}

impl Default for RenderersConfig {
    fn default() -> Self {
        Self {
            default: "text".to_string(),
            channels: HashMap::new(),
        }
    }
}

/// Default reporting levels, as strings so invalid values surface as
/// `InvalidLevel` at report time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelsConfig {
    pub message: String,
    pub exception: String,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            message: "info".to_string(),
            exception: "error".to_string(),
        }
    }
}

/// Date/time rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub timezones: Vec<String>,
    /// chrono format parts; an empty part widens the gap between columns.
    pub format: Vec<String>,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            timezones: vec!["UTC".to_string()],
            format: [
                "%A %-d %B %Y",
                "at %-I:%M%P",
                "(%Z)",
                "",
                "%Y-%m-%d %H:%M:%S",
                "%:z",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// A plain, own-your-values implementation of [`ConfigProvider`], loadable
/// from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub project_root: String,
    pub running_in_background: bool,
    pub background_command: Option<String>,
    pub channels: Vec<String>,
    pub levels: LevelsConfig,
    pub renderers: RenderersConfig,
    pub time: TimeConfig,
    pub prefix: String,
    /// `true` renders context detail groups oldest-first.
    pub oldest_first: bool,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            project_root: String::new(),
            running_in_background: false,
            background_command: None,
            channels: vec!["default".to_string()],
            levels: LevelsConfig::default(),
            renderers: RenderersConfig::default(),
            time: TimeConfig::default(),
            prefix: String::new(),
            oldest_first: true,
        }
    }
}

impl StaticConfig {
    /// # Errors
    /// `ConfigParse` when the TOML doesn't match the expected shape.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        toml::from_str(toml).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Marks this invocation as a background one and records its command
    /// line from raw arguments (typically `std::env::args()`), quoting
    /// where needed.
    #[must_use]
    pub fn background_command_from_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.running_in_background = true;
        self.background_command = Some(crate::fmt::cmdline::render(args));
        self
    }

    /// # Errors
    /// `Io` when the file can't be read, `ConfigParse` when it doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }
}

impl ConfigProvider for StaticConfig {
    fn project_root(&self) -> String {
        self.project_root.clone()
    }

    fn running_in_background(&self) -> bool {
        self.running_in_background
    }

    fn background_command(&self) -> Option<String> {
        self.background_command.clone()
    }

    fn default_channels(&self) -> Vec<String> {
        self.channels.clone()
    }

    fn default_exception_level(&self) -> String {
        self.levels.exception.clone()
    }

    fn default_message_level(&self) -> String {
        self.levels.message.clone()
    }

    fn renderer_overrides(&self) -> HashMap<String, String> {
        self.renderers.channels.clone()
    }

    fn default_renderer(&self) -> String {
        self.renderers.default.clone()
    }

    fn timezones(&self) -> Vec<String> {
        self.time.timezones.clone()
    }

    fn datetime_format(&self) -> Vec<String> {
        self.time.format.clone()
    }

    fn prefix(&self) -> String {
        self.prefix.clone()
    }

    fn use_call_stack_order(&self) -> bool {
        self.oldest_first
    }
}
